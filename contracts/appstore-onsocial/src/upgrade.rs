use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Owner only, 1 yoctoNEAR. Raw call input is the new contract wasm; it is
    /// deployed and `migrate` runs in the same batch.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, AppStoreError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input().unwrap_or_default();
        if code.is_empty() {
            return Err(AppStoreError::InvalidInput(
                "Contract code must be passed as raw input".into(),
            ));
        }
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let contract: Self =
            env::state_read().unwrap_or_else(|| env::panic_str("State read failed"));
        contract.into_current_version()
    }
}

impl Contract {
    /// Stamps the running crate version; emits `contract_upgrade` when it changes.
    pub(crate) fn into_current_version(mut self) -> Self {
        let new_version = env!("CARGO_PKG_VERSION");
        if self.version != new_version {
            let old_version = std::mem::replace(&mut self.version, new_version.to_string());
            events::emit_contract_upgraded(&env::current_account_id(), &old_version, new_version);
        }
        self
    }
}
