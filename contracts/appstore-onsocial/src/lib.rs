//! OnSocial AppStore: app registry, append-only version ledger, one-time purchases with
//! platform-fee splitting, and owner moderation. Binaries live off-chain; only content
//! references and payment accounting are stored here.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableSet, LookupMap, LookupSet, Vector};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;

mod purchases;
mod registry;
mod versions;

mod fees;
mod payments;
mod storage;

mod admin;
mod upgrade;


pub use constants::*;
pub use errors::{AppStoreError, ErrorCategory};
pub use fees::{FeeConfig, PurchaseQuote};
pub use purchases::{Purchase, PurchaseStatus};
pub use registry::{App, AppId};
pub use storage::StorageKey;
pub use versions::Version;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub fee_collector: AccountId,
    pub fee_config: FeeConfig,

    // Arena: AppId is the index into `apps`; slugs resolve through `app_ids_by_slug`.
    pub apps: Vector<App>,
    pub(crate) app_ids_by_slug: LookupMap<String, AppId>,
    pub(crate) apps_by_publisher: LookupMap<AccountId, IterableSet<AppId>>,

    pub(crate) versions: LookupMap<AppId, Vector<Version>>,

    pub(crate) purchases: LookupMap<u64, Purchase>,
    // Key: "{app_id}:{buyer_id}"; at most one purchase per pair.
    pub(crate) purchase_ids: LookupMap<String, u64>,
    pub next_purchase_id: u64,

    // Reentrancy guard: buyers with a paid purchase awaiting `resolve_app_purchase`.
    pub(crate) settlement_locks: LookupSet<AccountId>,
    // Bounced fee/refund legs, claimable by the recipient.
    pub(crate) unclaimed: LookupMap<AccountId, u128>,
}
