use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// `tier_thresholds` and `badge_policy` default to 10/50/200/1000 USDC and every-milestone minting.
    #[init]
    pub fn new(
        owner_id: AccountId,
        payment_token_id: AccountId,
        tier_thresholds: Option<TierThresholds>,
        badge_policy: Option<BadgePolicy>,
    ) -> Self {
        let thresholds = tier_thresholds.unwrap_or_default();
        if let Err(e) = thresholds.validate() {
            env::panic_str(&StoreError::from(e).to_string());
        }

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            fee_recipient: owner_id.clone(),
            owner_id,
            payment_token_id,
            fee_config: FeeConfig::default(),
            loyalty_config: LoyaltyConfig {
                thresholds,
                badge_policy: badge_policy.unwrap_or_default(),
            },
            products: IterableMap::new(StorageKey::Products),
            products_by_creator: LookupMap::new(StorageKey::ProductsByCreator),
            next_product_id: 0,
            holdings: LookupMap::new(StorageKey::Holdings),
            spend_ledgers: LookupMap::new(StorageKey::SpendLedgers),
            badge_balances: LookupMap::new(StorageKey::BadgeBalances),
            resale_listings: IterableMap::new(StorageKey::ResaleListings),
            unclaimed: LookupMap::new(StorageKey::Unclaimed),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), StoreError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(StoreError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_fee_recipient(&mut self, fee_recipient: AccountId) -> Result<(), StoreError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_recipient = self.fee_recipient.clone();
        self.fee_recipient = fee_recipient;
        events::emit_fee_recipient_changed(&self.owner_id, &old_recipient, &self.fee_recipient);
        Ok(())
    }

    /// Partial update; omitted fields keep their current value.
    #[payable]
    #[handle_result]
    pub fn set_fee_config(&mut self, update: FeeConfigUpdate) -> Result<(), StoreError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.fee_config.validate_patch(&update)?;
        self.fee_config.apply_patch(&update);
        events::emit_fee_config_updated(
            &self.owner_id,
            self.fee_config.platform_fee_bps,
            self.fee_config.default_royalty_bps,
            self.fee_config.primary_fee_bps,
        );
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_payment_token(&self) -> &AccountId {
        &self.payment_token_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
