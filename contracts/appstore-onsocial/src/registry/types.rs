use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk::near;

/// Index into the contract's app arena.
pub type AppId = u32;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct App {
    pub id: AppId,
    pub slug: String,
    pub publisher: AccountId,
    /// Mirrors the content reference of the most recently published version.
    pub latest_manifest_ref: String,
    /// yoctoNEAR; zero means free.
    pub price: U128,
    pub total_downloads: u64,
    /// Sum of every `price_paid` accepted for this app.
    pub total_revenue: U128,
    pub active: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

impl App {
    pub fn is_free(&self) -> bool {
        self.price.0 == 0
    }
}
