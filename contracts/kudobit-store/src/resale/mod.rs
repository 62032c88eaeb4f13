mod listing;
pub mod types;
mod views;

pub use types::ResaleListing;

pub(crate) use listing::resale_listing_id;
