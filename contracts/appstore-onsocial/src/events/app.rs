use near_sdk::AccountId;

use super::APP;
use super::builder::EventBuilder;
use crate::App;

pub fn emit_app_registered(app: &App, version_code: u64) {
    EventBuilder::new(APP, "app_registered", &app.publisher)
        .field("app_id", app.id)
        .field("slug", &app.slug)
        .field("publisher", &app.publisher)
        .field("content_ref", &app.latest_manifest_ref)
        .field("price", app.price)
        .field("version_code", version_code)
        .emit();
}

pub fn emit_app_status_changed(owner_id: &AccountId, slug: &str, active: bool) {
    EventBuilder::new(APP, "app_status_changed", owner_id)
        .field("slug", slug)
        .field("active", active)
        .emit();
}

pub fn emit_price_updated(publisher: &AccountId, slug: &str, old_price: u128, new_price: u128) {
    EventBuilder::new(APP, "price_updated", publisher)
        .field("slug", slug)
        .field("old_price", old_price)
        .field("new_price", new_price)
        .emit();
}
