use crate::guards::{check_one_yocto, hash_account_id};
use crate::validation::{validate_price, validate_product_name, validate_reference, validate_royalty_bps};
use crate::*;

#[near]
impl Contract {
    /// Lists a new product for the caller. Attached NEAR covers storage; the excess is refunded.
    #[payable]
    #[handle_result]
    pub fn list_product(
        &mut self,
        name: String,
        price: U128,
        royalty_bps: Option<u16>,
        reference: Option<String>,
    ) -> Result<u64, StoreError> {
        let creator_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();

        validate_product_name(&name)?;
        validate_price(price.0)?;
        validate_reference(reference.as_deref())?;
        if let Some(bps) = royalty_bps {
            validate_royalty_bps(bps)?;
        }

        let product_id = self.next_product_id;
        let before = self.storage_usage_flushed();

        self.products.insert(
            product_id,
            Product {
                product_id,
                creator_id: creator_id.clone(),
                name: name.clone(),
                price,
                royalty_bps,
                reference,
                active: true,
                total_sold: 0,
                created_at: env::block_timestamp(),
            },
        );
        if !self.products_by_creator.contains_key(&creator_id) {
            self.products_by_creator.insert(
                creator_id.clone(),
                IterableSet::new(StorageKey::ProductsByCreatorInner {
                    account_id_hash: hash_account_id(&creator_id),
                }),
            );
        }
        if let Some(ids) = self.products_by_creator.get_mut(&creator_id) {
            ids.insert(product_id);
        }

        let bytes_used = self.storage_usage_flushed().saturating_sub(before);
        self.charge_storage(&creator_id, bytes_used, deposit)?;
        self.next_product_id += 1;

        events::emit_product_listed(&creator_id, product_id, &name, price, royalty_bps);
        Ok(product_id)
    }

    #[payable]
    #[handle_result]
    pub fn update_product_price(&mut self, product_id: u64, price: U128) -> Result<(), StoreError> {
        check_one_yocto()?;
        validate_price(price.0)?;
        let actor_id = env::predecessor_account_id();
        let product = self.product_for_creator(product_id, &actor_id)?;

        let old_price = product.price;
        product.price = price;
        events::emit_product_price_updated(&actor_id, product_id, old_price, price);
        Ok(())
    }

    /// Inactive products cannot be bought new; existing copies can still be resold.
    #[payable]
    #[handle_result]
    pub fn set_product_active(&mut self, product_id: u64, active: bool) -> Result<(), StoreError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        let product = self.product_for_creator(product_id, &actor_id)?;

        product.active = active;
        events::emit_product_active_changed(&actor_id, product_id, active);
        Ok(())
    }
}

impl Contract {
    fn product_for_creator(
        &mut self,
        product_id: u64,
        actor_id: &AccountId,
    ) -> Result<&mut Product, StoreError> {
        let product = self
            .products
            .get_mut(&product_id)
            .ok_or_else(StoreError::product_not_found)?;
        if &product.creator_id != actor_id {
            return Err(StoreError::only_owner("the product creator"));
        }
        Ok(product)
    }
}
