use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::RESALE;
use super::builder::EventBuilder;

pub fn emit_resale_listed(seller_id: &AccountId, product_id: u64, price: U128) {
    EventBuilder::new(RESALE, "list", seller_id)
        .field("seller_id", seller_id)
        .field("product_id", product_id)
        .field("price", price)
        .emit();
}

pub fn emit_resale_price_updated(
    seller_id: &AccountId,
    product_id: u64,
    old_price: U128,
    new_price: U128,
) {
    EventBuilder::new(RESALE, "update_price", seller_id)
        .field("product_id", product_id)
        .field("old_price", old_price)
        .field("new_price", new_price)
        .emit();
}

pub fn emit_resale_cancelled(seller_id: &AccountId, product_id: u64) {
    EventBuilder::new(RESALE, "cancel", seller_id)
        .field("seller_id", seller_id)
        .field("product_id", product_id)
        .emit();
}
