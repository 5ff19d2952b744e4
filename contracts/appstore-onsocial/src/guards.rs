//! Access/moderation gate. Every mutating operation runs these checks before
//! any component-specific validation.

use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), AppStoreError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(AppStoreError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_publisher(app: &App, actor_id: &AccountId) -> Result<(), AppStoreError> {
    if actor_id != &app.publisher {
        return Err(AppStoreError::only("the app publisher"));
    }
    Ok(())
}

pub(crate) fn check_active(app: &App) -> Result<(), AppStoreError> {
    if !app.active {
        return Err(AppStoreError::Inactive(app.slug.clone()));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), AppStoreError> {
        if actor_id != &self.owner_id {
            return Err(AppStoreError::only("the contract owner"));
        }
        Ok(())
    }

    pub(crate) fn resolve_app_id(&self, slug: &str) -> Result<AppId, AppStoreError> {
        self.app_ids_by_slug
            .get(slug)
            .copied()
            .ok_or_else(|| AppStoreError::app_not_found(slug))
    }

    pub(crate) fn app_by_slug(&self, slug: &str) -> Result<&App, AppStoreError> {
        let app_id = self.resolve_app_id(slug)?;
        self.apps.get(app_id).ok_or_else(|| {
            AppStoreError::InternalError(format!("Slug '{}' points at missing app {}", slug, app_id))
        })
    }

    /// Looks up the app and requires `actor_id` to be its publisher.
    pub(crate) fn app_for_publisher(
        &self,
        slug: &str,
        actor_id: &AccountId,
    ) -> Result<&App, AppStoreError> {
        let app = self.app_by_slug(slug)?;
        check_publisher(app, actor_id)?;
        Ok(app)
    }
}
