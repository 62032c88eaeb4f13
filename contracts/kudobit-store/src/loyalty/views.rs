use crate::*;

#[near]
impl Contract {
    pub fn get_loyalty_config(&self) -> &LoyaltyConfig {
        &self.loyalty_config
    }

    pub fn get_spend_ledger(&self, account_id: AccountId) -> SpendLedger {
        self.spend_ledgers.get(&account_id).copied().unwrap_or_default()
    }

    pub fn get_loyalty_status(&self, account_id: AccountId) -> LoyaltyStatus {
        let ledger = self.get_spend_ledger(account_id.clone());
        let thresholds = &self.loyalty_config.thresholds;
        let next = thresholds.next_tier(ledger.total_spent);
        LoyaltyStatus {
            account_id,
            total_spent: U128(ledger.total_spent),
            purchase_count: ledger.purchase_count,
            current_tier: thresholds.tier_for(ledger.total_spent),
            next_tier: next.map(|(tier, _)| tier),
            amount_to_next_tier: next.map(|(_, remaining)| U128(remaining)),
        }
    }

    /// Dry run of a purchase of `amount` by `account_id`; nothing is recorded.
    #[handle_result]
    pub fn classify_purchase(
        &self,
        account_id: AccountId,
        amount: U128,
    ) -> Result<ClassificationResult, StoreError> {
        self.preview_spend(&account_id, amount.0)
            .map(|(_, result)| result)
    }
}
