use crate::*;

/// One unit of a product offered by a holder other than its creator.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ResaleListing {
    pub product_id: u64,
    pub seller_id: AccountId,
    pub price: U128,
    pub listed_at: u64,
    /// NEAR paid for this listing's storage; returned when it is sold or cancelled.
    pub storage_deposit: U128,
}
