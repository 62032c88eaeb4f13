mod builder;
mod types;

mod contract;
mod loyalty;
mod payout;
mod product;
mod purchase;
mod resale;

pub use contract::*;
pub use loyalty::*;
pub use payout::*;
pub use product::*;
pub use purchase::*;
pub use resale::*;

pub(crate) const STANDARD: &str = "kudobit";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const PRODUCT: &str = "PRODUCT_UPDATE";
pub(crate) const PURCHASE: &str = "PURCHASE_UPDATE";
pub(crate) const LOYALTY: &str = "LOYALTY_UPDATE";
pub(crate) const RESALE: &str = "RESALE_UPDATE";
pub(crate) const PAYOUT: &str = "PAYOUT_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
