mod publish;
mod types;
mod views;

pub use types::Version;
