use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub product_id: u64,
    pub creator_id: AccountId,
    pub name: String,
    /// Base units of the payment token.
    pub price: U128,
    /// Resale royalty override; `None` or 0 falls back to the contract default.
    pub royalty_bps: Option<u16>,
    /// Opaque pointer to the content (e.g. an IPFS CID); never dereferenced on-chain.
    pub reference: Option<String>,
    pub active: bool,
    pub total_sold: u64,
    pub created_at: u64,
}
