//! Typed error handling for the app store contract.
//!
//! Every public mutating method is `#[handle_result]`; returning
//! `Err(AppStoreError::Xxx)` makes the SDK call `env::panic_str()` with the
//! Display message, which discards all state written during the call.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum AppStoreError {
    EmptySlug,
    EmptyContentRef,
    InvalidInput(String),
    NotFound(String),
    NotAuthorized(String),
    DuplicateSlug(String),
    NonMonotonicVersion(String),
    AlreadyPurchased(String),
    Inactive(String),
    InvalidIndex(String),
    /// The buyer already has a paid purchase waiting for its resolve callback.
    PurchaseInFlight(String),
    InsufficientPayment(String),
    /// Attached deposit does not cover storage.
    InsufficientDeposit(String),
    TransferFailed(String),
    InternalError(String),
}

/// Coarse error taxonomy used by clients to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Authorization,
    State,
    Payment,
    Internal,
}

impl std::fmt::Display for AppStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySlug => write!(f, "Empty slug: slug must not be blank"),
            Self::EmptyContentRef => {
                write!(f, "Empty content ref: content reference must not be blank")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::NotAuthorized(msg) => write!(f, "Not authorized: {}", msg),
            Self::DuplicateSlug(slug) => write!(f, "Duplicate slug: {}", slug),
            Self::NonMonotonicVersion(msg) => write!(f, "Non-monotonic version: {}", msg),
            Self::AlreadyPurchased(msg) => write!(f, "Already purchased: {}", msg),
            Self::Inactive(slug) => write!(f, "Inactive: app '{}' is disabled", slug),
            Self::InvalidIndex(msg) => write!(f, "Invalid index: {}", msg),
            Self::PurchaseInFlight(msg) => write!(f, "Purchase in flight: {}", msg),
            Self::InsufficientPayment(msg) => write!(f, "Insufficient payment: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::TransferFailed(msg) => write!(f, "Transfer failed: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppStoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptySlug | Self::EmptyContentRef | Self::InvalidInput(_) => {
                ErrorCategory::Validation
            }
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::NotAuthorized(_) => ErrorCategory::Authorization,
            Self::DuplicateSlug(_)
            | Self::NonMonotonicVersion(_)
            | Self::AlreadyPurchased(_)
            | Self::Inactive(_)
            | Self::InvalidIndex(_)
            | Self::PurchaseInFlight(_) => ErrorCategory::State,
            Self::InsufficientPayment(_)
            | Self::InsufficientDeposit(_)
            | Self::TransferFailed(_) => ErrorCategory::Payment,
            Self::InternalError(_) => ErrorCategory::Internal,
        }
    }

    pub fn app_not_found(slug: &str) -> Self {
        Self::NotFound(format!("App not found: {}", slug))
    }

    pub fn only(what: &str) -> Self {
        Self::NotAuthorized(format!("Only {} can perform this action", what))
    }

    pub fn version_index_out_of_range(index: u32, count: u32) -> Self {
        Self::InvalidIndex(format!(
            "Version index {} out of range (version count {})",
            index, count
        ))
    }
}
