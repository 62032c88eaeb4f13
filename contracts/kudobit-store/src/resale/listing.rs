use crate::guards::{check_one_yocto, composite_key};
use crate::validation::validate_price;
use crate::*;

pub(crate) fn resale_listing_id(product_id: u64, seller_id: &AccountId) -> String {
    composite_key(product_id, seller_id)
}

#[near]
impl Contract {
    /// Offers one held unit for resale. The unit leaves the seller's holdings until sold or cancelled.
    #[payable]
    #[handle_result]
    pub fn list_for_resale(&mut self, product_id: u64, price: U128) -> Result<(), StoreError> {
        let seller_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        validate_price(price.0)?;

        let product = self
            .products
            .get(&product_id)
            .ok_or_else(StoreError::product_not_found)?;
        if product.creator_id == seller_id {
            return Err(StoreError::InvalidInput(
                "Creators sell their own products through the primary listing".into(),
            ));
        }

        let listing_id = resale_listing_id(product_id, &seller_id);
        if self.resale_listings.contains_key(&listing_id) {
            return Err(StoreError::InvalidState(
                "A resale listing for this product already exists".into(),
            ));
        }

        let before = self.storage_usage_flushed();
        self.take_holding(product_id, &seller_id)?;
        self.resale_listings.insert(
            listing_id.clone(),
            ResaleListing {
                product_id,
                seller_id: seller_id.clone(),
                price,
                listed_at: env::block_timestamp(),
                storage_deposit: U128(0),
            },
        );
        let bytes_used = self.storage_usage_flushed().saturating_sub(before);

        let cost = self.charge_storage(&seller_id, bytes_used, deposit)?;
        if let Some(listing) = self.resale_listings.get_mut(&listing_id) {
            listing.storage_deposit = U128(cost);
        }

        events::emit_resale_listed(&seller_id, product_id, price);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn update_resale_price(&mut self, product_id: u64, price: U128) -> Result<(), StoreError> {
        check_one_yocto()?;
        validate_price(price.0)?;
        let seller_id = env::predecessor_account_id();

        let listing = self
            .resale_listings
            .get_mut(&resale_listing_id(product_id, &seller_id))
            .ok_or_else(StoreError::listing_not_found)?;
        let old_price = listing.price;
        listing.price = price;

        events::emit_resale_price_updated(&seller_id, product_id, old_price, price);
        Ok(())
    }

    /// Withdraws the caller's listing, returning the unit and the storage deposit.
    #[payable]
    #[handle_result]
    pub fn cancel_resale(&mut self, product_id: u64) -> Result<(), StoreError> {
        check_one_yocto()?;
        let seller_id = env::predecessor_account_id();

        let listing = self.remove_resale_listing(product_id, &seller_id)?;
        self.add_holding(product_id, &seller_id);

        self.refund_listing_deposit(&listing);

        events::emit_resale_cancelled(&seller_id, product_id);
        Ok(())
    }
}

impl Contract {
    pub(crate) fn remove_resale_listing(
        &mut self,
        product_id: u64,
        seller_id: &AccountId,
    ) -> Result<ResaleListing, StoreError> {
        self.resale_listings
            .remove(&resale_listing_id(product_id, seller_id))
            .ok_or_else(StoreError::listing_not_found)
    }

    pub(crate) fn refund_listing_deposit(&self, listing: &ResaleListing) {
        if listing.storage_deposit.0 > 0 {
            let _ = Promise::new(listing.seller_id.clone())
                .transfer(NearToken::from_yoctonear(listing.storage_deposit.0));
        }
    }
}
