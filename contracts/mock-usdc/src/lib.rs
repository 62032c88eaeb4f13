//! Minimal NEP-141 mock stablecoin for integration testing.
//!
//! Enough of NEP-141 and NEP-145 to drive the store end to end:
//! - ft_transfer_call (purchases, with unused-amount refunds)
//! - ft_transfer (payouts; unregistered receivers fail like a real token)
//! - storage_deposit / storage_balance_of (registration only)
//! - mint and fail_next_transfer test hooks

use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{env, near, AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue};

const STORAGE_BALANCE: NearToken = NearToken::from_yoctonear(1_250_000_000_000_000_000_000);
const GAS_FT_ON_TRANSFER_TGAS: u64 = 150;
const GAS_RESOLVE_TRANSFER_TGAS: u64 = 10;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MockUsdc {
    // Presence means registered.
    balances: LookupMap<AccountId, u128>,
    total_supply: u128,
    /// Test helper: if set, the next ft_transfer will fail
    fail_next_transfer: bool,
}

#[near(serializers = [json])]
pub struct FtMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[near(serializers = [json])]
pub struct StorageBalance {
    pub total: U128,
    pub available: U128,
}

#[near]
impl MockUsdc {
    #[init]
    pub fn new(owner_id: AccountId, total_supply: U128) -> Self {
        let mut balances = LookupMap::new(b"b");
        balances.insert(owner_id, total_supply.0);
        Self {
            balances,
            total_supply: total_supply.0,
            fail_next_transfer: false,
        }
    }

    // =========================================================================
    // NEP-141 Core
    // =========================================================================

    #[payable]
    pub fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>) {
        assert_one_yocto();

        if self.fail_next_transfer {
            self.fail_next_transfer = false;
            env::panic_str("MockUSDC: Simulated transfer failure");
        }

        let sender_id = env::predecessor_account_id();
        self.internal_transfer(&sender_id, &receiver_id, amount.0, memo);
    }

    #[payable]
    pub fn ft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        amount: U128,
        memo: Option<String>,
        msg: String,
    ) -> PromiseOrValue<U128> {
        assert_one_yocto();
        let sender_id = env::predecessor_account_id();
        self.internal_transfer(&sender_id, &receiver_id, amount.0, memo);

        Promise::new(receiver_id.clone())
            .function_call(
                "ft_on_transfer".to_string(),
                near_sdk::serde_json::json!({
                    "sender_id": sender_id,
                    "amount": amount,
                    "msg": msg
                })
                .to_string()
                .into_bytes(),
                NearToken::from_near(0),
                Gas::from_tgas(GAS_FT_ON_TRANSFER_TGAS),
            )
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_TRANSFER_TGAS))
                    .ft_resolve_transfer(sender_id, receiver_id, amount),
            )
            .into()
    }

    pub fn ft_balance_of(&self, account_id: AccountId) -> U128 {
        U128(self.balances.get(&account_id).copied().unwrap_or(0))
    }

    pub fn ft_total_supply(&self) -> U128 {
        U128(self.total_supply)
    }

    pub fn ft_metadata(&self) -> FtMetadata {
        FtMetadata {
            spec: "ft-1.0.0".to_string(),
            name: "Mock USD Coin".to_string(),
            symbol: "USDC".to_string(),
            decimals: 6,
        }
    }

    /// Refunds whatever the receiver reported as unused (all of it if the receiver failed).
    #[private]
    pub fn ft_resolve_transfer(
        &mut self,
        sender_id: AccountId,
        receiver_id: AccountId,
        amount: U128,
    ) -> U128 {
        let unused = match env::promise_result_checked(0, 64) {
            Ok(data) => near_sdk::serde_json::from_slice::<U128>(&data)
                .map(|unused| unused.0.min(amount.0))
                .unwrap_or(0),
            Err(_) => amount.0,
        };

        if unused > 0 {
            let receiver_balance = self.balances.get(&receiver_id).copied().unwrap_or(0);
            let refund = unused.min(receiver_balance);
            if refund > 0 {
                self.balances.insert(receiver_id, receiver_balance - refund);
                let sender_balance = self.balances.get(&sender_id).copied().unwrap_or(0);
                self.balances.insert(sender_id, sender_balance + refund);
            }
        }

        U128(amount.0 - unused)
    }

    // =========================================================================
    // NEP-145 Storage Management (registration only)
    // =========================================================================

    #[payable]
    pub fn storage_deposit(
        &mut self,
        account_id: Option<AccountId>,
        registration_only: Option<bool>,
    ) -> StorageBalance {
        let _ = registration_only;
        let account_id = account_id.unwrap_or_else(env::predecessor_account_id);
        let deposit = env::attached_deposit();
        if self.balances.contains_key(&account_id) {
            if !deposit.is_zero() {
                let _ = Promise::new(env::predecessor_account_id()).transfer(deposit);
            }
        } else {
            assert!(deposit >= STORAGE_BALANCE, "Attach at least {} for registration", STORAGE_BALANCE);
            self.balances.insert(account_id, 0);
            let refund = deposit.saturating_sub(STORAGE_BALANCE);
            if !refund.is_zero() {
                let _ = Promise::new(env::predecessor_account_id()).transfer(refund);
            }
        }
        StorageBalance {
            total: U128(STORAGE_BALANCE.as_yoctonear()),
            available: U128(0),
        }
    }

    pub fn storage_balance_of(&self, account_id: AccountId) -> Option<StorageBalance> {
        self.balances
            .contains_key(&account_id)
            .then(|| StorageBalance {
                total: U128(STORAGE_BALANCE.as_yoctonear()),
                available: U128(0),
            })
    }

    // =========================================================================
    // Test Helpers (not in real FT)
    // =========================================================================

    /// Mint tokens to account, registering it if needed.
    pub fn mint(&mut self, account_id: AccountId, amount: U128) {
        let current = self.balances.get(&account_id).copied().unwrap_or(0);
        self.balances.insert(account_id, current + amount.0);
        self.total_supply += amount.0;
    }

    /// Set flag to fail the next ft_transfer call (for testing payout callbacks)
    pub fn set_fail_next_transfer(&mut self, should_fail: bool) {
        self.fail_next_transfer = should_fail;
    }

    pub fn get_fail_next_transfer(&self) -> bool {
        self.fail_next_transfer
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn internal_transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        amount: u128,
        _memo: Option<String>,
    ) {
        assert!(amount > 0, "The amount should be a positive number");
        assert_ne!(sender_id, receiver_id, "Sender and receiver should be different");
        let sender_balance = self
            .balances
            .get(sender_id)
            .copied()
            .unwrap_or_else(|| env::panic_str(&format!("The account {} is not registered", sender_id)));
        assert!(sender_balance >= amount, "Insufficient balance");
        let receiver_balance = self
            .balances
            .get(receiver_id)
            .copied()
            .unwrap_or_else(|| env::panic_str(&format!("The account {} is not registered", receiver_id)));

        self.balances.insert(sender_id.clone(), sender_balance - amount);
        self.balances.insert(receiver_id.clone(), receiver_balance + amount);
    }
}

fn assert_one_yocto() {
    assert_eq!(
        env::attached_deposit(),
        NearToken::from_yoctonear(1),
        "Requires 1 yoctoNEAR"
    );
}
