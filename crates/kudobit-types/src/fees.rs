//! Three-way resale split with floor rounding; the rounding residual goes to the seller.

use primitive_types::U256;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::CoreError;

pub const BASIS_POINTS: u16 = 10_000; // 100%
pub const DEFAULT_CREATOR_ROYALTY_BPS: u16 = 500; // 5%
pub const PLATFORM_FEE_BPS: u16 = 250; // 2.5%

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeeSplitResult {
    #[serde(with = "crate::amount::u128_string")]
    #[schemars(with = "String")]
    pub platform_fee: u128,
    #[serde(with = "crate::amount::u128_string")]
    #[schemars(with = "String")]
    pub creator_royalty: u128,
    #[serde(with = "crate::amount::u128_string")]
    #[schemars(with = "String")]
    pub seller_amount: u128,
}

impl FeeSplitResult {
    pub fn total(&self) -> u128 {
        self.platform_fee + self.creator_royalty + self.seller_amount
    }
}

// bps <= BASIS_POINTS, so the quotient never exceeds price.
fn bps_of(price: u128, bps: u16) -> u128 {
    (U256::from(price) * U256::from(bps) / U256::from(BASIS_POINTS)).as_u128()
}

pub fn compute_split(
    resale_price: u128,
    platform_fee_bps: u16,
    creator_royalty_bps: u16,
) -> Result<FeeSplitResult, CoreError> {
    if resale_price == 0 {
        return Err(CoreError::InvalidAmount("resale price must be positive".into()));
    }
    if platform_fee_bps as u32 + creator_royalty_bps as u32 > BASIS_POINTS as u32 {
        return Err(CoreError::InvalidConfiguration(format!(
            "platform fee {platform_fee_bps} bps + creator royalty {creator_royalty_bps} bps exceeds {BASIS_POINTS} bps"
        )));
    }

    let platform_fee = bps_of(resale_price, platform_fee_bps);
    let creator_royalty = bps_of(resale_price, creator_royalty_bps);
    let seller_amount = resale_price - platform_fee - creator_royalty;

    Ok(FeeSplitResult {
        platform_fee,
        creator_royalty,
        seller_amount,
    })
}

/// Product override when set and non-zero, otherwise `default_bps`.
pub fn effective_royalty_bps(product_royalty_bps: Option<u16>, default_bps: u16) -> u16 {
    match product_royalty_bps {
        Some(bps) if bps > 0 => bps,
        _ => default_bps,
    }
}
