//! Cumulative-spend classification.
//!
//! A tier is newly earned when `previous_total < threshold <= new_total`. The
//! decision depends only on the previous total, so replaying monotonically
//! increasing totals never reports a tier twice and no earned-badge set is needed.

use borsh::{BorshDeserialize, BorshSchema, BorshSerialize};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{CoreError, LoyaltyTier, TierThresholds};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassificationResult {
    #[serde(with = "crate::amount::u128_string")]
    #[schemars(with = "String")]
    pub new_total_spent: u128,
    /// Ascending; empty when no threshold was crossed.
    pub newly_earned_tiers: Vec<LoyaltyTier>,
    pub current_tier: LoyaltyTier,
    pub previous_tier: LoyaltyTier,
}

impl ClassificationResult {
    pub fn crossed_any(&self) -> bool {
        !self.newly_earned_tiers.is_empty()
    }
}

pub fn classify(
    previous_total_spent: u128,
    purchase_amount: u128,
    thresholds: &TierThresholds,
) -> Result<ClassificationResult, CoreError> {
    if purchase_amount == 0 {
        return Err(CoreError::InvalidAmount(
            "purchase amount must be positive".into(),
        ));
    }
    thresholds.validate()?;

    let new_total_spent = previous_total_spent
        .checked_add(purchase_amount)
        .ok_or_else(|| CoreError::InvalidAmount("cumulative spend overflows u128".into()))?;

    let newly_earned_tiers = LoyaltyTier::EARNABLE
        .iter()
        .copied()
        .filter(|tier| {
            let threshold = thresholds.threshold(*tier);
            previous_total_spent < threshold && threshold <= new_total_spent
        })
        .collect();

    Ok(ClassificationResult {
        new_total_spent,
        newly_earned_tiers,
        current_tier: thresholds.tier_for(new_total_spent),
        previous_tier: thresholds.tier_for(previous_total_spent),
    })
}

/// Which badges a purchase mints when it crosses more than one threshold at once.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    BorshSchema,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BadgePolicy {
    /// One badge for every tier crossed.
    #[default]
    EveryMilestone,
    /// Only the badge of the highest tier crossed.
    HighestOnly,
}

impl BadgePolicy {
    pub fn badges_to_mint(self, result: &ClassificationResult) -> Vec<LoyaltyTier> {
        match self {
            Self::EveryMilestone => result.newly_earned_tiers.clone(),
            Self::HighestOnly => result.newly_earned_tiers.last().copied().into_iter().collect(),
        }
    }
}
