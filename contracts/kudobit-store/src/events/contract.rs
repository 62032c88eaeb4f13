use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_fee_recipient_changed(
    owner_id: &AccountId,
    old_recipient: &AccountId,
    new_recipient: &AccountId,
) {
    EventBuilder::new(CONTRACT, "fee_recipient_changed", owner_id)
        .field("old_recipient", old_recipient)
        .field("new_recipient", new_recipient)
        .emit();
}

pub fn emit_fee_config_updated(
    owner_id: &AccountId,
    platform_fee_bps: u16,
    default_royalty_bps: u16,
    primary_fee_bps: u16,
) {
    EventBuilder::new(CONTRACT, "fee_config_updated", owner_id)
        .field("platform_fee_bps", platform_fee_bps as u32)
        .field("default_royalty_bps", default_royalty_bps as u32)
        .field("primary_fee_bps", primary_fee_bps as u32)
        .emit();
}
