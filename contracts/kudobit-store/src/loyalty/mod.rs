mod badges;
mod ledger;
pub mod types;
mod views;

pub use types::{BadgeBalanceView, LoyaltyConfig, LoyaltyStatus};
