use near_sdk::AccountId;

use kudobit_types::FeeSplitResult;

use super::PURCHASE;
use super::builder::EventBuilder;

pub fn emit_primary_purchase(
    buyer_id: &AccountId,
    creator_id: &AccountId,
    product_id: u64,
    price: u128,
    split: &FeeSplitResult,
) {
    EventBuilder::new(PURCHASE, "buy", buyer_id)
        .field("buyer_id", buyer_id)
        .field("creator_id", creator_id)
        .field("product_id", product_id)
        .field("price", price)
        .field("platform_fee", split.platform_fee)
        .field("creator_amount", split.seller_amount)
        .emit();
}

pub struct ResalePurchase<'a> {
    pub buyer_id: &'a AccountId,
    pub seller_id: &'a AccountId,
    pub creator_id: &'a AccountId,
    pub product_id: u64,
    pub price: u128,
    pub royalty_bps: u16,
    pub split: &'a FeeSplitResult,
}

pub fn emit_resale_purchase(e: &ResalePurchase) {
    EventBuilder::new(PURCHASE, "buy_resale", e.buyer_id)
        .field("buyer_id", e.buyer_id)
        .field("seller_id", e.seller_id)
        .field("creator_id", e.creator_id)
        .field("product_id", e.product_id)
        .field("price", e.price)
        .field("royalty_bps", e.royalty_bps as u32)
        .field("platform_fee", e.split.platform_fee)
        .field("creator_royalty", e.split.creator_royalty)
        .field("seller_amount", e.split.seller_amount)
        .emit();
}
