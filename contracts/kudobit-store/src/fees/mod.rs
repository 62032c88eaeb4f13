pub mod types;
mod views;

pub use types::{FeeConfig, FeeConfigUpdate};
