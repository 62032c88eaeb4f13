use anyhow::Result;
use near_workspaces::network::Sandbox;
use near_workspaces::types::{Gas, NearToken};
use near_workspaces::{sandbox, Account, Contract, Worker};
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::fs;

/// 1 USDC in base units (6 decimals).
pub const ONE_USDC: u128 = 1_000_000;

pub async fn setup_sandbox() -> Result<Worker<Sandbox>> {
    let mut last_err = None;
    for attempt in 1..=6 {
        match sandbox().await {
            Ok(worker) => return Ok(worker),
            Err(e) => {
                eprintln!(
                    "[setup_sandbox] Attempt {}/6 failed, retrying in 5s: {}",
                    attempt, e
                );
                last_err = Some(e);
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            }
        }
    }
    Err(anyhow::anyhow!(
        "Failed to set up sandbox after 6 attempts: {:?}",
        last_err
    ))
}

pub async fn deploy_contract(worker: &Worker<Sandbox>, wasm_path: &str) -> Result<Contract> {
    let wasm = fs::read(wasm_path)?;
    let contract = worker.dev_deploy(&wasm).await?;
    Ok(contract)
}

pub fn get_wasm_path(contract_name: &str) -> String {
    env::var(format!(
        "{}_WASM_PATH",
        contract_name.to_uppercase().replace('-', "_")
    ))
    .unwrap_or_else(|_| {
        format!(
            "../target/near/{0}/{0}.wasm",
            contract_name.replace('-', "_")
        )
    })
}

// =============================================================================
// View Structs (match contract's return types)
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SpendLedgerView {
    pub total_spent: String,
    pub purchase_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoyaltyStatusView {
    pub total_spent: String,
    pub purchase_count: u64,
    pub current_tier: String,
    pub next_tier: Option<String>,
    pub amount_to_next_tier: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BadgeView {
    pub tier: String,
    pub balance: u64,
}

// =============================================================================
// Fixture
// =============================================================================

/// Store wired to a mock USDC, with a creator, two buyers and every account registered on the token.
pub struct Kudobit {
    pub worker: Worker<Sandbox>,
    pub owner: Account,
    pub creator: Account,
    pub alice: Account,
    pub bob: Account,
    pub usdc: Contract,
    pub store: Contract,
}

impl Kudobit {
    /// Default loyalty thresholds: 10/50/200/1000 USDC.
    pub async fn setup() -> Result<Self> {
        Self::setup_with(json!({})).await
    }

    /// `init_extra` is merged into the store's `new` args (e.g. `tier_thresholds`, `badge_policy`).
    pub async fn setup_with(init_extra: Value) -> Result<Self> {
        let worker = setup_sandbox().await?;
        let owner = worker.dev_create_account().await?;
        let creator = worker.dev_create_account().await?;
        let alice = worker.dev_create_account().await?;
        let bob = worker.dev_create_account().await?;

        let usdc = deploy_contract(&worker, &get_wasm_path("mock-usdc")).await?;
        usdc.call("new")
            .args_json(json!({
                "owner_id": owner.id(),
                "total_supply": (1_000_000 * ONE_USDC).to_string(),
            }))
            .transact()
            .await?
            .into_result()?;

        let store = deploy_contract(&worker, &get_wasm_path("kudobit-store")).await?;
        let mut args = json!({
            "owner_id": owner.id(),
            "payment_token_id": usdc.id(),
        });
        if let (Some(args), Some(extra)) = (args.as_object_mut(), init_extra.as_object()) {
            args.extend(extra.clone());
        }
        store
            .call("new")
            .args_json(args)
            .transact()
            .await?
            .into_result()?;

        let env = Self {
            worker,
            owner,
            creator,
            alice,
            bob,
            usdc,
            store,
        };
        for account in [&env.creator, &env.alice, &env.bob] {
            env.register(account).await?;
        }
        env.register(env.store.as_account()).await?;
        env.mint(&env.alice, 5_000 * ONE_USDC).await?;
        env.mint(&env.bob, 5_000 * ONE_USDC).await?;
        Ok(env)
    }

    pub async fn register(&self, account: &Account) -> Result<()> {
        account
            .call(self.usdc.id(), "storage_deposit")
            .args_json(json!({ "account_id": account.id() }))
            .deposit(NearToken::from_millinear(50))
            .transact()
            .await?
            .into_result()?;
        Ok(())
    }

    pub async fn mint(&self, account: &Account, amount: u128) -> Result<()> {
        self.usdc
            .call("mint")
            .args_json(json!({ "account_id": account.id(), "amount": amount.to_string() }))
            .transact()
            .await?
            .into_result()?;
        Ok(())
    }

    /// Lists a product as the creator; returns its ID.
    pub async fn list_product(&self, price: u128, royalty_bps: Option<u16>) -> Result<u64> {
        let id: u64 = self
            .creator
            .call(self.store.id(), "list_product")
            .args_json(json!({
                "name": "Sample pack",
                "price": price.to_string(),
                "royalty_bps": royalty_bps,
            }))
            .deposit(NearToken::from_millinear(100))
            .transact()
            .await?
            .into_result()?
            .json()?;
        Ok(id)
    }

    /// Pays `amount` USDC into the store with `msg`; returns the amount the token kept.
    pub async fn pay(&self, buyer: &Account, amount: u128, msg: Value) -> Result<u128> {
        let used: String = buyer
            .call(self.usdc.id(), "ft_transfer_call")
            .args_json(json!({
                "receiver_id": self.store.id(),
                "amount": amount.to_string(),
                "msg": msg.to_string(),
            }))
            .deposit(NearToken::from_yoctonear(1))
            .gas(Gas::from_tgas(300))
            .transact()
            .await?
            .into_result()?
            .json()?;
        Ok(used.parse()?)
    }

    pub async fn buy(&self, buyer: &Account, product_id: u64, amount: u128) -> Result<u128> {
        self.pay(buyer, amount, json!({ "action": "buy", "product_id": product_id }))
            .await
    }

    pub async fn list_for_resale(&self, seller: &Account, product_id: u64, price: u128) -> Result<()> {
        seller
            .call(self.store.id(), "list_for_resale")
            .args_json(json!({ "product_id": product_id, "price": price.to_string() }))
            .deposit(NearToken::from_millinear(100))
            .transact()
            .await?
            .into_result()?;
        Ok(())
    }

    pub async fn usdc_balance(&self, account: &Account) -> Result<u128> {
        let balance: String = self
            .usdc
            .view("ft_balance_of")
            .args_json(json!({ "account_id": account.id() }))
            .await?
            .json()?;
        Ok(balance.parse()?)
    }

    pub async fn view<T: serde::de::DeserializeOwned>(&self, method: &str, args: Value) -> Result<T> {
        Ok(self.store.view(method).args_json(args).await?.json()?)
    }
}
