//! Loyalty-tier classification and resale fee splitting for KudoBit.
//! No NEAR SDK dependency, so it is usable both on-chain and off-chain.

pub mod amount;
mod error;
mod fees;
mod ledger;
mod loyalty;
mod tier;

pub use error::CoreError;
pub use fees::{
    BASIS_POINTS, DEFAULT_CREATOR_ROYALTY_BPS, FeeSplitResult, PLATFORM_FEE_BPS, compute_split,
    effective_royalty_bps,
};
pub use ledger::SpendLedger;
pub use loyalty::{BadgePolicy, ClassificationResult, classify};
pub use tier::{LoyaltyTier, TierThresholds};
