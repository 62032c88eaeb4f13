use near_sdk::NearToken;

pub use kudobit_types::{BASIS_POINTS, DEFAULT_CREATOR_ROYALTY_BPS, PLATFORM_FEE_BPS};

// Creators keep the full primary price unless the owner configures otherwise.
pub const DEFAULT_PRIMARY_FEE_BPS: u16 = 0;
pub const MAX_PLATFORM_FEE_BPS: u16 = 1_000; // 10%
pub const MAX_PRIMARY_FEE_BPS: u16 = 1_000; // 10%
pub const MAX_ROYALTY_BPS: u16 = 5_000; // 50%

pub const BADGE_MINT_AMOUNT: u64 = 1;

// Upper bound on the buyer-side records one purchase can add (holding, ledger, badges).
// The store pays for these from its own balance.
pub const PURCHASE_STORAGE_BYTES: u64 = 1_000;

pub const MAX_PRODUCT_NAME_LEN: usize = 128;
pub const MAX_REFERENCE_LEN: usize = 512;
pub const MAX_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

// Storage key invariant: ':' cannot appear in NEAR account IDs, so composite keys cannot collide.
pub const KEY_DELIMITER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_FT_TRANSFER_TGAS: u64 = 10;
pub const GAS_PAYOUT_CALLBACK_TGAS: u64 = 5;
pub const GAS_MIGRATE_TGAS: u64 = 200;
