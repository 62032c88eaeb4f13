use crate::*;

#[near]
impl Contract {
    /// Owner-only self-upgrade: the new wasm is the raw call input.
    #[payable]
    pub fn update_contract(&mut self) -> Promise {
        if let Err(e) = crate::guards::check_one_yocto()
            .and_then(|()| self.check_contract_owner(&env::predecessor_account_id()))
        {
            env::panic_str(&e.to_string());
        }
        let code = env::input().unwrap_or_else(|| env::panic_str("No input"));
        Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return()
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self =
            env::state_read().unwrap_or_else(|| env::panic_str("State read failed"));
        let old_version = contract.version.clone();
        contract.version = env!("CARGO_PKG_VERSION").to_string();

        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &contract.version);

        contract
    }
}
