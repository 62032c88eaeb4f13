use crate::external::ext_ft_contract;
use crate::*;

#[near]
impl Contract {
    /// Resolves a payout `ft_transfer`; a failed transfer is parked in the receiver's unclaimed balance.
    #[private]
    pub fn on_payout_resolved(&mut self, receiver_id: AccountId, amount: U128) -> bool {
        if env::promise_results_count() == 1 && env::promise_result_checked(0, 0).is_ok() {
            return true;
        }
        let balance = self.unclaimed.get(&receiver_id).copied().unwrap_or(0) + amount.0;
        self.unclaimed.insert(receiver_id.clone(), balance);
        events::emit_payout_failed(&receiver_id, amount.0, balance);
        false
    }

    /// Retries the caller's failed payouts as a single transfer.
    #[handle_result]
    pub fn claim_unclaimed(&mut self) -> Result<Promise, StoreError> {
        let receiver_id = env::predecessor_account_id();
        let amount = self
            .unclaimed
            .remove(&receiver_id)
            .filter(|a| *a > 0)
            .ok_or_else(|| StoreError::NotFound("No unclaimed balance".into()))?;

        events::emit_unclaimed_claimed(&receiver_id, amount);
        Ok(self.payout_promise(&receiver_id, amount))
    }

    pub fn get_unclaimed(&self, account_id: AccountId) -> U128 {
        U128(self.unclaimed.get(&account_id).copied().unwrap_or(0))
    }
}

impl Contract {
    /// Fire-and-forget payout; zero amounts are skipped.
    pub(crate) fn pay_out(&self, receiver_id: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let _ = self.payout_promise(receiver_id, amount);
    }

    fn payout_promise(&self, receiver_id: &AccountId, amount: u128) -> Promise {
        ext_ft_contract::ext(self.payment_token_id.clone())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(Gas::from_tgas(GAS_FT_TRANSFER_TGAS))
            .ft_transfer(receiver_id.clone(), U128(amount), Some("kudobit payout".into()))
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_PAYOUT_CALLBACK_TGAS))
                    .on_payout_resolved(receiver_id.clone(), U128(amount)),
            )
    }
}
