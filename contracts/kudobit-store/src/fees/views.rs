use crate::*;
use kudobit_types::{compute_split, effective_royalty_bps};

#[near]
impl Contract {
    pub fn get_fee_config(&self) -> &FeeConfig {
        &self.fee_config
    }

    pub fn get_fee_recipient(&self) -> AccountId {
        self.fee_recipient.clone()
    }

    /// Split a resale of `product_id` at `price` would produce under the current config.
    #[handle_result]
    pub fn preview_resale_split(
        &self,
        product_id: u64,
        price: U128,
    ) -> Result<FeeSplitResult, StoreError> {
        let product = self
            .products
            .get(&product_id)
            .ok_or_else(StoreError::product_not_found)?;
        self.resale_split(product, price.0)
    }
}

impl Contract {
    pub(crate) fn resale_royalty_bps(&self, product: &Product) -> u16 {
        effective_royalty_bps(product.royalty_bps, self.fee_config.default_royalty_bps)
    }

    pub(crate) fn resale_split(
        &self,
        product: &Product,
        price: u128,
    ) -> Result<FeeSplitResult, StoreError> {
        let royalty_bps = self.resale_royalty_bps(product);
        Ok(compute_split(price, self.fee_config.platform_fee_bps, royalty_bps)?)
    }

    // Primary sales carry no royalty: the creator is the seller.
    pub(crate) fn primary_split(&self, price: u128) -> Result<FeeSplitResult, StoreError> {
        Ok(compute_split(price, self.fee_config.primary_fee_bps, 0)?)
    }
}
