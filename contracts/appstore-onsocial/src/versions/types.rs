use near_sdk::{env, near};

/// One immutable release in an app's version ledger. Only `deprecated` may
/// change after publication.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Version {
    pub version_code: u64,
    pub content_ref: String,
    pub published_at: u64,
    pub deprecated: bool,
}

impl Version {
    pub fn new(version_code: u64, content_ref: String) -> Self {
        Self {
            version_code,
            content_ref,
            published_at: env::block_timestamp(),
            deprecated: false,
        }
    }
}
