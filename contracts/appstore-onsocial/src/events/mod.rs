mod builder;
mod types;

mod app;
mod contract;
mod purchase;
mod version;

pub use app::*;
pub use contract::*;
pub use purchase::*;
pub use version::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const APP: &str = "APP_UPDATE";
pub(crate) const VERSION_UPDATE: &str = "VERSION_UPDATE";
pub(crate) const PURCHASE: &str = "PURCHASE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
