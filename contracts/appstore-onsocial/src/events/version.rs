use near_sdk::AccountId;

use super::VERSION_UPDATE;
use super::builder::EventBuilder;

pub fn emit_version_published(
    publisher: &AccountId,
    slug: &str,
    version_index: u32,
    version_code: u64,
    content_ref: &str,
) {
    EventBuilder::new(VERSION_UPDATE, "version_published", publisher)
        .field("slug", slug)
        .field("version_index", version_index)
        .field("version_code", version_code)
        .field("content_ref", content_ref)
        .emit();
}

pub fn emit_version_deprecated(
    publisher: &AccountId,
    slug: &str,
    version_index: u32,
    version_code: u64,
) {
    EventBuilder::new(VERSION_UPDATE, "version_deprecated", publisher)
        .field("slug", slug)
        .field("version_index", version_index)
        .field("version_code", version_code)
        .emit();
}
