use crate::validation::validate_content_ref;
use crate::*;

#[near]
impl Contract {
    /// Publisher only. Appends a version whose code is strictly greater than the
    /// latest one and points the app's manifest at it. Returns the new version index.
    #[payable]
    #[handle_result]
    pub fn publish_version(
        &mut self,
        slug: String,
        content_ref: String,
        version_code: u64,
    ) -> Result<u32, AppStoreError> {
        let publisher = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.with_storage_charge(&publisher, deposit, |contract| {
            contract.internal_publish_version(&publisher, &slug, content_ref, version_code)
        })
    }

    /// Publisher only. Flags a version as deprecated without removing it.
    #[handle_result]
    pub fn deprecate_version(&mut self, slug: String, version_index: u32) -> Result<(), AppStoreError> {
        self.internal_deprecate_version(&env::predecessor_account_id(), &slug, version_index)
    }
}

impl Contract {
    pub(crate) fn open_version_ledger(&mut self, app_id: AppId, first: Version) {
        let mut ledger = Vector::new(StorageKey::VersionsInner { app_id });
        ledger.push(first);
        ledger.flush();
        self.versions.insert(app_id, ledger);
    }

    pub(crate) fn internal_publish_version(
        &mut self,
        actor_id: &AccountId,
        slug: &str,
        content_ref: String,
        version_code: u64,
    ) -> Result<u32, AppStoreError> {
        let app_id = self.app_for_publisher(slug, actor_id)?.id;
        validate_content_ref(&content_ref)?;

        let ledger = self.versions.get_mut(&app_id).ok_or_else(|| missing_ledger(slug))?;
        let count = ledger.len();
        if let Some(latest) = count.checked_sub(1).and_then(|i| ledger.get(i)) {
            if version_code <= latest.version_code {
                return Err(AppStoreError::NonMonotonicVersion(format!(
                    "version code {} must be greater than {}",
                    version_code, latest.version_code
                )));
            }
        }
        ledger.push(Version::new(version_code, content_ref.clone()));
        ledger.flush();

        if let Some(app) = self.apps.get_mut(app_id) {
            app.latest_manifest_ref = content_ref.clone();
            app.updated_at = env::block_timestamp();
        }

        events::emit_version_published(actor_id, slug, count, version_code, &content_ref);
        Ok(count)
    }

    pub(crate) fn internal_deprecate_version(
        &mut self,
        actor_id: &AccountId,
        slug: &str,
        version_index: u32,
    ) -> Result<(), AppStoreError> {
        let app_id = self.app_for_publisher(slug, actor_id)?.id;

        let ledger = self.versions.get_mut(&app_id).ok_or_else(|| missing_ledger(slug))?;
        let count = ledger.len();
        let Some(version) = ledger.get_mut(version_index) else {
            return Err(AppStoreError::version_index_out_of_range(version_index, count));
        };
        // Re-deprecating is accepted and re-emitted.
        version.deprecated = true;
        let version_code = version.version_code;
        ledger.flush();

        events::emit_version_deprecated(actor_id, slug, version_index, version_code);
        Ok(())
    }
}

fn missing_ledger(slug: &str) -> AppStoreError {
    AppStoreError::InternalError(format!("App '{}' has no version ledger", slug))
}
