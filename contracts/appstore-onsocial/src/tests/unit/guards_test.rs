use crate::guards::*;
use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- check_one_yocto ---

#[test]
fn check_one_yocto_exact() {
    testing_env!(context_with_deposit(owner(), 1).build());
    assert!(check_one_yocto().is_ok());
}

#[test]
fn check_one_yocto_zero_fails() {
    testing_env!(context_with_deposit(owner(), 0).build());
    let err = check_one_yocto().unwrap_err();
    assert!(matches!(err, AppStoreError::InsufficientDeposit(_)));
}

#[test]
fn check_one_yocto_too_much_fails() {
    testing_env!(context_with_deposit(owner(), 2).build());
    assert!(check_one_yocto().is_err());
}

// --- app gates ---

#[test]
fn check_publisher_matches_only_publisher() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 0);
    let app = contract.get_app("chat".into()).unwrap();
    assert!(check_publisher(&app, &publisher()).is_ok());
    assert_eq!(
        check_publisher(&app, &owner()).unwrap_err(),
        AppStoreError::only("the app publisher")
    );
}

#[test]
fn check_active_reports_slug() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 0);
    let mut app = contract.get_app("chat".into()).unwrap();
    assert!(check_active(&app).is_ok());
    app.active = false;
    let err = check_active(&app).unwrap_err();
    assert_eq!(err.to_string(), "Inactive: app 'chat' is disabled");
}

#[test]
fn check_contract_owner_rejects_others() {
    let contract = new_contract();
    assert!(contract.check_contract_owner(&owner()).is_ok());
    assert!(contract.check_contract_owner(&buyer()).is_err());
}

#[test]
fn app_for_publisher_checks_existence_first() {
    let contract = new_contract();
    let err = contract.app_for_publisher("ghost", &buyer()).unwrap_err();
    assert!(matches!(err, AppStoreError::NotFound(_)));
}

#[test]
fn resolve_app_id_uses_slug_index() {
    let mut contract = new_contract();
    register(&mut contract, "a", 0);
    register(&mut contract, "b", 0);
    assert_eq!(contract.resolve_app_id("b").unwrap(), 1);
    assert!(contract.resolve_app_id("c").is_err());
}

// --- error taxonomy ---

#[test]
fn error_categories() {
    assert_eq!(AppStoreError::EmptySlug.category(), ErrorCategory::Validation);
    assert_eq!(AppStoreError::EmptyContentRef.category(), ErrorCategory::Validation);
    assert_eq!(AppStoreError::DuplicateSlug("x".into()).category(), ErrorCategory::State);
    assert_eq!(
        AppStoreError::NonMonotonicVersion("x".into()).category(),
        ErrorCategory::State
    );
    assert_eq!(AppStoreError::PurchaseInFlight("x".into()).category(), ErrorCategory::State);
    assert_eq!(AppStoreError::TransferFailed("x".into()).category(), ErrorCategory::Payment);
    assert_eq!(AppStoreError::InternalError("x".into()).category(), ErrorCategory::Internal);
}
