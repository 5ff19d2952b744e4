use crate::guards::hash_account_id;
use crate::validation::{validate_content_ref, validate_slug};
use crate::*;

#[near]
impl Contract {
    /// Registers a new app with its first version. The caller becomes the publisher
    /// and pays for the storage it adds; any excess deposit is returned.
    #[payable]
    #[handle_result]
    pub fn register_app(
        &mut self,
        slug: String,
        content_ref: String,
        price: U128,
        version_code: u64,
    ) -> Result<AppId, AppStoreError> {
        let publisher = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.with_storage_charge(&publisher, deposit, |contract| {
            contract.internal_register_app(&publisher, slug, content_ref, price.0, version_code)
        })
    }

    /// Publisher only. Takes effect for future purchases; existing purchases keep
    /// the price they paid.
    #[handle_result]
    pub fn update_price(&mut self, slug: String, new_price: U128) -> Result<(), AppStoreError> {
        self.internal_update_price(&env::predecessor_account_id(), &slug, new_price.0)
    }
}

impl Contract {
    pub(crate) fn internal_register_app(
        &mut self,
        publisher: &AccountId,
        slug: String,
        content_ref: String,
        price: u128,
        version_code: u64,
    ) -> Result<AppId, AppStoreError> {
        validate_slug(&slug)?;
        validate_content_ref(&content_ref)?;
        if self.app_ids_by_slug.contains_key(&slug) {
            return Err(AppStoreError::DuplicateSlug(slug));
        }

        let app_id: AppId = self.apps.len();
        let now = env::block_timestamp();
        let app = App {
            id: app_id,
            slug: slug.clone(),
            publisher: publisher.clone(),
            latest_manifest_ref: content_ref.clone(),
            price: U128(price),
            total_downloads: 0,
            total_revenue: U128(0),
            active: true,
            created_at: now,
            updated_at: now,
        };
        events::emit_app_registered(&app, version_code);

        self.apps.push(app);
        self.app_ids_by_slug.insert(slug.clone(), app_id);
        self.index_app_for_publisher(publisher, app_id);
        self.open_version_ledger(app_id, Version::new(version_code, content_ref.clone()));

        events::emit_version_published(publisher, &slug, 0, version_code, &content_ref);
        Ok(app_id)
    }

    pub(crate) fn internal_update_price(
        &mut self,
        actor_id: &AccountId,
        slug: &str,
        new_price: u128,
    ) -> Result<(), AppStoreError> {
        let app_id = self.app_for_publisher(slug, actor_id)?.id;
        let Some(app) = self.apps.get_mut(app_id) else {
            return Err(AppStoreError::app_not_found(slug));
        };
        let old_price = app.price.0;
        app.price = U128(new_price);
        app.updated_at = env::block_timestamp();

        events::emit_price_updated(actor_id, slug, old_price, new_price);
        Ok(())
    }

    fn index_app_for_publisher(&mut self, publisher: &AccountId, app_id: AppId) {
        let mut by_publisher = self.apps_by_publisher.remove(publisher).unwrap_or_else(|| {
            IterableSet::new(StorageKey::AppsByPublisherInner {
                account_id_hash: hash_account_id(publisher),
            })
        });
        by_publisher.insert(app_id);
        by_publisher.flush();
        self.apps_by_publisher.insert(publisher.clone(), by_publisher);
    }
}
