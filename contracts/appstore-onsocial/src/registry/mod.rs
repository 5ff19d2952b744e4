mod manage;
mod moderate;
mod types;
mod views;

pub use types::{App, AppId};
