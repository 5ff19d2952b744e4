use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

use crate::AppId;

#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseStatus {
    /// Accepted and recorded; the publisher transfer has not resolved yet.
    Pending,
    Settled,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Purchase {
    pub id: u64,
    pub app_id: AppId,
    pub slug: String,
    pub buyer_id: AccountId,
    pub price_paid: U128,
    pub fee: U128,
    pub publisher_amount: U128,
    pub timestamp: u64,
    pub status: PurchaseStatus,
}
