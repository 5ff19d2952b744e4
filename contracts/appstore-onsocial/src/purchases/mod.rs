mod ledger;
mod types;
mod views;

pub(crate) use ledger::purchase_key;
pub use types::{Purchase, PurchaseStatus};
