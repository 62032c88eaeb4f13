//! KudoBit store: creator products paid in a NEP-141 stablecoin, resale with
//! creator royalties, and loyalty badges minted from cumulative spend.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod external;

mod fees;
mod loyalty;
mod product;
mod resale;

mod admin;
mod ft_receiver;
mod payout;
mod purchase;
mod storage;
mod upgrade;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::StoreError;
pub use fees::{FeeConfig, FeeConfigUpdate};
pub use kudobit_types::{
    BadgePolicy, ClassificationResult, FeeSplitResult, LoyaltyTier, SpendLedger, TierThresholds,
};
pub use loyalty::{BadgeBalanceView, LoyaltyConfig, LoyaltyStatus};
pub use product::Product;
pub use purchase::PurchaseMsg;
pub use resale::ResaleListing;
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub fee_recipient: AccountId,
    /// NEP-141 stablecoin every price is denominated in.
    pub payment_token_id: AccountId,

    pub fee_config: FeeConfig,
    // Fixed at init: changing thresholds would re-report tiers already crossed.
    pub loyalty_config: LoyaltyConfig,

    pub products: IterableMap<u64, Product>,
    pub(crate) products_by_creator: LookupMap<AccountId, IterableSet<u64>>,
    pub next_product_id: u64,

    // Key: "{product_id}:{account_id}"; units owned and not listed for resale.
    pub(crate) holdings: LookupMap<String, u32>,
    pub spend_ledgers: LookupMap<AccountId, SpendLedger>,
    // Key: "{account_id}:{tier}".
    pub(crate) badge_balances: LookupMap<String, u64>,

    // Key: "{product_id}:{seller_id}"; the listed unit is escrowed out of holdings.
    pub resale_listings: IterableMap<String, ResaleListing>,

    /// Payouts whose `ft_transfer` failed; claimable by the recipient.
    pub unclaimed: LookupMap<AccountId, u128>,
}
