//! Loyalty tiers and their spend thresholds.

use borsh::{BorshDeserialize, BorshSchema, BorshSerialize};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Micro-USDC per USDC (6 decimals).
const USDC: u128 = 1_000_000;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    BorshSchema,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    #[default]
    None,
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl LoyaltyTier {
    /// Tiers that carry a badge, ascending.
    pub const EARNABLE: [LoyaltyTier; 4] = [
        LoyaltyTier::Bronze,
        LoyaltyTier::Silver,
        LoyaltyTier::Gold,
        LoyaltyTier::Diamond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Diamond => "diamond",
        }
    }
}

impl std::fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LoyaltyTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "bronze" => Ok(Self::Bronze),
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            "diamond" => Ok(Self::Diamond),
            other => Err(CoreError::InvalidConfiguration(format!(
                "unknown loyalty tier '{other}'"
            ))),
        }
    }
}

/// Minimum cumulative spend (inclusive, base units) for each earnable tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    BorshSchema,
    JsonSchema,
)]
pub struct TierThresholds {
    #[serde(with = "crate::amount::u128_string")]
    #[schemars(with = "String")]
    pub bronze: u128,
    #[serde(with = "crate::amount::u128_string")]
    #[schemars(with = "String")]
    pub silver: u128,
    #[serde(with = "crate::amount::u128_string")]
    #[schemars(with = "String")]
    pub gold: u128,
    #[serde(with = "crate::amount::u128_string")]
    #[schemars(with = "String")]
    pub diamond: u128,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            bronze: 10 * USDC,
            silver: 50 * USDC,
            gold: 200 * USDC,
            diamond: 1_000 * USDC,
        }
    }
}

impl TierThresholds {
    pub fn new(bronze: u128, silver: u128, gold: u128, diamond: u128) -> Result<Self, CoreError> {
        let thresholds = Self {
            bronze,
            silver,
            gold,
            diamond,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Thresholds must be strictly increasing, and Bronze must be reachable only by spending.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.bronze == 0 {
            return Err(CoreError::InvalidConfiguration(
                "bronze threshold must be positive".into(),
            ));
        }
        if !(self.bronze < self.silver && self.silver < self.gold && self.gold < self.diamond) {
            return Err(CoreError::InvalidConfiguration(format!(
                "tier thresholds must be strictly increasing (bronze={}, silver={}, gold={}, diamond={})",
                self.bronze, self.silver, self.gold, self.diamond
            )));
        }
        Ok(())
    }

    pub fn threshold(&self, tier: LoyaltyTier) -> u128 {
        match tier {
            LoyaltyTier::None => 0,
            LoyaltyTier::Bronze => self.bronze,
            LoyaltyTier::Silver => self.silver,
            LoyaltyTier::Gold => self.gold,
            LoyaltyTier::Diamond => self.diamond,
        }
    }

    /// Highest tier whose threshold is at or below `total`.
    pub fn tier_for(&self, total: u128) -> LoyaltyTier {
        LoyaltyTier::EARNABLE
            .iter()
            .rev()
            .copied()
            .find(|tier| self.threshold(*tier) <= total)
            .unwrap_or(LoyaltyTier::None)
    }

    /// Next tier above `total` and the spend still missing to reach it; `None` at Diamond.
    pub fn next_tier(&self, total: u128) -> Option<(LoyaltyTier, u128)> {
        LoyaltyTier::EARNABLE
            .iter()
            .copied()
            .find(|tier| self.threshold(*tier) > total)
            .map(|tier| (tier, self.threshold(tier) - total))
    }
}
