use crate::*;

#[near]
impl Contract {
    /// NEP-141 entry point for purchases. Only the configured stablecoin is accepted.
    /// Returns the overpayment for refund; any error rejects the whole transfer.
    #[handle_result]
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> Result<U128, StoreError> {
        if env::predecessor_account_id() != self.payment_token_id {
            return Err(StoreError::Unauthorized(format!(
                "Only {} is accepted as payment",
                self.payment_token_id
            )));
        }
        if amount.0 == 0 {
            return Err(StoreError::InvalidAmount("Amount must be positive".into()));
        }

        let action: PurchaseMsg = near_sdk::serde_json::from_str(&msg)
            .map_err(|e| StoreError::InvalidInput(format!("Invalid purchase msg: {}", e)))?;

        let price = match action {
            PurchaseMsg::Buy { product_id } => self.buy_item(&sender_id, product_id, amount.0)?,
            PurchaseMsg::BuyResale {
                product_id,
                seller_id,
            } => self.buy_resale_item(&sender_id, product_id, &seller_id, amount.0)?,
        };

        Ok(U128(amount.0 - price))
    }
}
