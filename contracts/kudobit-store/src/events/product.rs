use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::PRODUCT;
use super::builder::EventBuilder;

pub fn emit_product_listed(
    creator_id: &AccountId,
    product_id: u64,
    name: &str,
    price: U128,
    royalty_bps: Option<u16>,
) {
    EventBuilder::new(PRODUCT, "list", creator_id)
        .field("creator_id", creator_id)
        .field("product_id", product_id)
        .field("name", name)
        .field("price", price)
        .field_opt("royalty_bps", royalty_bps.map(u32::from))
        .emit();
}

pub fn emit_product_price_updated(
    creator_id: &AccountId,
    product_id: u64,
    old_price: U128,
    new_price: U128,
) {
    EventBuilder::new(PRODUCT, "update_price", creator_id)
        .field("product_id", product_id)
        .field("old_price", old_price)
        .field("new_price", new_price)
        .emit();
}

pub fn emit_product_active_changed(creator_id: &AccountId, product_id: u64, active: bool) {
    EventBuilder::new(PRODUCT, "set_active", creator_id)
        .field("product_id", product_id)
        .field("active", active)
        .emit();
}
