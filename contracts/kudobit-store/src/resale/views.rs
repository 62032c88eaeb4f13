use crate::validation::page_bounds;
use crate::*;

use super::resale_listing_id;

#[near]
impl Contract {
    pub fn get_resale_listing(&self, product_id: u64, seller_id: AccountId) -> Option<ResaleListing> {
        self.resale_listings
            .get(&resale_listing_id(product_id, &seller_id))
            .cloned()
    }

    pub fn get_resale_listings(
        &self,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<ResaleListing> {
        let (start, limit) = page_bounds(from_index, limit);
        self.resale_listings
            .values()
            .skip(start)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn get_resale_listings_for_product(
        &self,
        product_id: u64,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<ResaleListing> {
        let (start, limit) = page_bounds(from_index, limit);
        self.resale_listings
            .values()
            .filter(|l| l.product_id == product_id)
            .skip(start)
            .take(limit)
            .cloned()
            .collect()
    }
}
