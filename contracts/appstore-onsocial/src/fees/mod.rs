mod split;
mod types;
mod views;

pub(crate) use split::split_price;
pub use types::{FeeConfig, PurchaseQuote};
