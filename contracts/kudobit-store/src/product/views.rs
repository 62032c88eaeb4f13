use crate::validation::page_bounds;
use crate::*;

#[near]
impl Contract {
    pub fn get_product(&self, product_id: u64) -> Option<Product> {
        self.products.get(&product_id).cloned()
    }

    pub fn get_product_count(&self) -> u64 {
        self.products.len() as u64
    }

    pub fn get_products(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<Product> {
        let (start, limit) = page_bounds(from_index, limit);
        self.products
            .values()
            .skip(start)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn get_products_by_creator(
        &self,
        creator_id: AccountId,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<Product> {
        let Some(ids) = self.products_by_creator.get(&creator_id) else {
            return vec![];
        };
        let (start, limit) = page_bounds(from_index, limit);
        ids.iter()
            .skip(start)
            .filter_map(|id| self.products.get(id).cloned())
            .take(limit)
            .collect()
    }
}
