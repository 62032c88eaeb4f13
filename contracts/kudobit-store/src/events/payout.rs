use near_sdk::AccountId;

use super::PAYOUT;
use super::builder::EventBuilder;

pub fn emit_payout_failed(receiver_id: &AccountId, amount: u128, unclaimed_balance: u128) {
    EventBuilder::new(PAYOUT, "payout_failed", receiver_id)
        .field("receiver_id", receiver_id)
        .field("amount", amount)
        .field("unclaimed_balance", unclaimed_balance)
        .emit();
}

pub fn emit_unclaimed_claimed(receiver_id: &AccountId, amount: u128) {
    EventBuilder::new(PAYOUT, "claim_unclaimed", receiver_id)
        .field("receiver_id", receiver_id)
        .field("amount", amount)
        .emit();
}
