use crate::*;

/// `msg` payload of an `ft_transfer_call` into the store.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PurchaseMsg {
    Buy { product_id: u64 },
    BuyResale { product_id: u64, seller_id: AccountId },
}

impl Contract {
    /// Primary sale. Everything is validated before the first write; returns the price consumed.
    pub(crate) fn buy_item(
        &mut self,
        buyer_id: &AccountId,
        product_id: u64,
        payment: u128,
    ) -> Result<u128, StoreError> {
        let product = self
            .products
            .get(&product_id)
            .ok_or_else(StoreError::product_not_found)?;
        if !product.active {
            return Err(StoreError::InvalidState("Product is not for sale".into()));
        }
        if &product.creator_id == buyer_id {
            return Err(StoreError::InvalidInput("Creator cannot buy own product".into()));
        }
        let price = product.price.0;
        check_payment(payment, price)?;
        let creator_id = product.creator_id.clone();

        let split = self.primary_split(price)?;
        let (ledger, result) = self.preview_spend(buyer_id, price)?;
        self.check_purchase_storage_reserve()?;

        if let Some(product) = self.products.get_mut(&product_id) {
            product.total_sold += 1;
        }
        self.add_holding(product_id, buyer_id);
        self.commit_spend(buyer_id, ledger, &result);

        self.pay_out(&creator_id, split.seller_amount);
        self.pay_out(&self.fee_recipient, split.platform_fee);

        events::emit_primary_purchase(buyer_id, &creator_id, product_id, price, &split);
        Ok(price)
    }

    /// Secondary sale of `seller_id`'s listed unit, with the creator royalty carved out.
    pub(crate) fn buy_resale_item(
        &mut self,
        buyer_id: &AccountId,
        product_id: u64,
        seller_id: &AccountId,
        payment: u128,
    ) -> Result<u128, StoreError> {
        if buyer_id == seller_id {
            return Err(StoreError::InvalidInput("Cannot buy your own listing".into()));
        }
        let listing = self
            .get_resale_listing(product_id, seller_id.clone())
            .ok_or_else(StoreError::listing_not_found)?;
        let product = self
            .products
            .get(&product_id)
            .ok_or_else(StoreError::product_not_found)?;
        if &product.creator_id == buyer_id {
            return Err(StoreError::InvalidInput("Creator cannot buy own product".into()));
        }
        let price = listing.price.0;
        check_payment(payment, price)?;
        let creator_id = product.creator_id.clone();

        let royalty_bps = self.resale_royalty_bps(product);
        let split = self.resale_split(product, price)?;
        let (ledger, result) = self.preview_spend(buyer_id, price)?;
        self.check_purchase_storage_reserve()?;

        self.remove_resale_listing(product_id, seller_id)?;
        self.add_holding(product_id, buyer_id);
        self.commit_spend(buyer_id, ledger, &result);

        self.pay_out(seller_id, split.seller_amount);
        self.pay_out(&creator_id, split.creator_royalty);
        self.pay_out(&self.fee_recipient, split.platform_fee);
        self.refund_listing_deposit(&listing);

        events::emit_resale_purchase(&events::ResalePurchase {
            buyer_id,
            seller_id,
            creator_id: &creator_id,
            product_id,
            price,
            royalty_bps,
            split: &split,
        });
        Ok(price)
    }
}

fn check_payment(payment: u128, price: u128) -> Result<(), StoreError> {
    if payment < price {
        return Err(StoreError::InvalidAmount(format!(
            "Payment {} is less than price {}",
            payment, price
        )));
    }
    Ok(())
}
