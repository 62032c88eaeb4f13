use near_sdk::BorshStorageKey;

use crate::*;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Products,
    ProductsByCreator,
    ProductsByCreatorInner { account_id_hash: Vec<u8> },
    Holdings,
    SpendLedgers,
    BadgeBalances,
    ResaleListings,
    Unclaimed,
}

#[inline]
pub(crate) fn storage_byte_cost() -> u128 {
    env::storage_byte_cost().as_yoctonear()
}

impl Contract {
    // Storage accounting invariant: flush deferred writes before measuring usage.
    pub(crate) fn flush_state(&mut self) {
        self.products.flush();
        self.products_by_creator.flush();
        self.holdings.flush();
        self.resale_listings.flush();
    }

    #[inline]
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.flush_state();
        env::storage_usage()
    }

    /// Charges `bytes_used` against the attached deposit and refunds the rest. Returns the cost.
    pub(crate) fn charge_storage(
        &self,
        payer_id: &AccountId,
        bytes_used: u64,
        deposit: u128,
    ) -> Result<u128, StoreError> {
        let cost = bytes_used as u128 * storage_byte_cost();
        if deposit < cost {
            return Err(StoreError::InsufficientDeposit(format!(
                "Attached deposit {} is less than storage cost {}",
                deposit, cost
            )));
        }
        let refund = deposit - cost;
        if refund > 0 {
            let _ = Promise::new(payer_id.clone()).transfer(NearToken::from_yoctonear(refund));
        }
        Ok(cost)
    }

    /// Rejects a purchase when the store's free balance cannot cover the buyer-side records.
    pub(crate) fn check_purchase_storage_reserve(&self) -> Result<(), StoreError> {
        let locked = env::storage_usage() as u128 * storage_byte_cost();
        let available = env::account_balance().as_yoctonear().saturating_sub(locked);
        let needed = PURCHASE_STORAGE_BYTES as u128 * storage_byte_cost();
        if available < needed {
            return Err(StoreError::InvalidState(format!(
                "Store balance {} cannot cover purchase storage {}",
                available, needed
            )));
        }
        Ok(())
    }
}
