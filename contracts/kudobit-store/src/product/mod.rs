mod holdings;
mod manage;
pub mod types;
mod views;

pub use types::Product;
