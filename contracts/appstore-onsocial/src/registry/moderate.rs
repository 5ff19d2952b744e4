use crate::*;

#[near]
impl Contract {
    /// Owner only. Disabling an app blocks future purchases and downloads; versions,
    /// purchases and counters are left untouched.
    #[handle_result]
    pub fn set_app_status(&mut self, slug: String, active: bool) -> Result<(), AppStoreError> {
        self.internal_set_app_status(&env::predecessor_account_id(), &slug, active)
    }
}

impl Contract {
    pub(crate) fn internal_set_app_status(
        &mut self,
        actor_id: &AccountId,
        slug: &str,
        active: bool,
    ) -> Result<(), AppStoreError> {
        let app_id = self.resolve_app_id(slug)?;
        self.check_contract_owner(actor_id)?;

        let Some(app) = self.apps.get_mut(app_id) else {
            return Err(AppStoreError::app_not_found(slug));
        };
        app.active = active;

        events::emit_app_status_changed(actor_id, slug, active);
        Ok(())
    }
}
