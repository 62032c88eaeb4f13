use near_sdk::AccountId;

use kudobit_types::LoyaltyTier;

use super::LOYALTY;
use super::builder::EventBuilder;

pub fn emit_badge_minted(account_id: &AccountId, tier: LoyaltyTier, amount: u64, new_balance: u64) {
    EventBuilder::new(LOYALTY, "badge_minted", account_id)
        .field("account_id", account_id)
        .field("tier", tier)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_tier_changed(
    account_id: &AccountId,
    previous_tier: LoyaltyTier,
    current_tier: LoyaltyTier,
    total_spent: u128,
    newly_earned: &[LoyaltyTier],
) {
    EventBuilder::new(LOYALTY, "tier_changed", account_id)
        .field("account_id", account_id)
        .field("previous_tier", previous_tier)
        .field("current_tier", current_tier)
        .field("total_spent", total_spent)
        .field("newly_earned_tiers", newly_earned)
        .emit();
}
