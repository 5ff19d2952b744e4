use near_sdk::BorshStorageKey;
use near_sdk::near;

use crate::AppId;

#[inline]
pub(crate) fn storage_byte_cost() -> u128 {
    near_sdk::env::storage_byte_cost().as_yoctonear()
}

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Apps,
    AppIdsBySlug,
    AppsByPublisher,
    AppsByPublisherInner { account_id_hash: Vec<u8> },
    Versions,
    VersionsInner { app_id: AppId },
    Purchases,
    PurchaseIds,
    SettlementLocks,
    Unclaimed,
}
