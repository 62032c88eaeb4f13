use crate::guards::composite_key;
use crate::*;

pub(crate) fn holding_key(product_id: u64, account_id: &AccountId) -> String {
    composite_key(product_id, account_id)
}

#[near]
impl Contract {
    /// Units of `product_id` held by `account_id`, excluding any unit listed for resale.
    pub fn get_holdings(&self, product_id: u64, account_id: AccountId) -> u32 {
        self.holdings
            .get(&holding_key(product_id, &account_id))
            .copied()
            .unwrap_or(0)
    }
}

impl Contract {
    pub(crate) fn add_holding(&mut self, product_id: u64, account_id: &AccountId) {
        let key = holding_key(product_id, account_id);
        let held = self.holdings.get(&key).copied().unwrap_or(0);
        self.holdings.insert(key, held.saturating_add(1));
    }

    pub(crate) fn take_holding(
        &mut self,
        product_id: u64,
        account_id: &AccountId,
    ) -> Result<(), StoreError> {
        let key = holding_key(product_id, account_id);
        let held = self.holdings.get(&key).copied().unwrap_or(0);
        if held == 0 {
            return Err(StoreError::InvalidState(
                "Account does not hold this product".into(),
            ));
        }
        self.holdings.insert(key, held - 1);
        Ok(())
    }
}
