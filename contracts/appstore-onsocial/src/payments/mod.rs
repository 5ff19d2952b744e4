mod legs;
mod plan;
mod purchase;
mod resolve;

pub(crate) use plan::PurchasePlan;
pub(crate) use purchase::PurchaseOutcome;
