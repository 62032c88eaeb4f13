use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoyaltyConfig {
    pub thresholds: TierThresholds,
    pub badge_policy: BadgePolicy,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct LoyaltyStatus {
    pub account_id: AccountId,
    pub total_spent: U128,
    pub purchase_count: u64,
    pub current_tier: LoyaltyTier,
    pub next_tier: Option<LoyaltyTier>,
    /// Spend still missing to reach `next_tier`.
    pub amount_to_next_tier: Option<U128>,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeBalanceView {
    pub tier: LoyaltyTier,
    pub balance: u64,
}
