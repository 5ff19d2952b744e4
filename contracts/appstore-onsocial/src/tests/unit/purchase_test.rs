use crate::payments::PurchaseOutcome;
use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn committed(outcome: PurchaseOutcome) -> crate::payments::PurchasePlan {
    match outcome {
        PurchaseOutcome::Committed(plan) => plan,
        other => panic!("expected a committed purchase, got {other:?}"),
    }
}

// --- paid path ---

#[test]
fn paid_purchase_splits_fee_and_refunds_overpayment() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);

    let plan = committed(buy(&mut contract, &buyer(), "chat", 150).unwrap());
    assert_eq!(plan.fee, 2);
    assert_eq!(plan.publisher_amount, 98);
    assert_eq!(plan.deposit, 150);
    assert_eq!(plan.publisher, publisher());
    assert!(contract.has_purchased(buyer(), "chat".into()).unwrap());

    let app = contract.get_app("chat".into()).unwrap();
    assert_eq!(app.total_downloads, 1);
    assert_eq!(app.total_revenue.0, 100);

    let purchase = contract.get_purchase(buyer(), "chat".into()).unwrap().unwrap();
    assert_eq!(purchase.price_paid.0, 100);
    assert_eq!(purchase.fee.0, 2);
    assert_eq!(purchase.publisher_amount.0, 98);
    assert_eq!(purchase.status, PurchaseStatus::Pending);
}

#[test]
fn second_purchase_by_same_buyer_fails() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    buy_and_settle(&mut contract, &buyer(), "chat", 150);

    let err = buy(&mut contract, &buyer(), "chat", 100).unwrap_err();
    assert!(matches!(err, AppStoreError::AlreadyPurchased(_)));
    let app = contract.get_app("chat".into()).unwrap();
    assert_eq!(app.total_downloads, 1);
    assert_eq!(app.total_revenue.0, 100);
}

#[test]
fn second_purchase_while_pending_fails_already_purchased() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    buy(&mut contract, &buyer(), "chat", 100).unwrap();

    let err = buy(&mut contract, &buyer(), "chat", 100).unwrap_err();
    assert!(matches!(err, AppStoreError::AlreadyPurchased(_)));
}

#[test]
fn insufficient_payment_mutates_nothing() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);

    let err = buy(&mut contract, &buyer(), "chat", 99).unwrap_err();
    assert!(matches!(err, AppStoreError::InsufficientPayment(_)));
    assert_eq!(err.category(), ErrorCategory::Payment);
    assert!(!contract.has_purchased(buyer(), "chat".into()).unwrap());
    let app = contract.get_app("chat".into()).unwrap();
    assert_eq!(app.total_downloads, 0);
    assert_eq!(app.total_revenue.0, 0);
    assert_eq!(contract.next_purchase_id, 0);
    assert!(!contract.settlement_locks.contains(&buyer()));
}

#[test]
fn exact_payment_has_no_refund_leg() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    let plan = committed(buy(&mut contract, &buyer(), "chat", 100).unwrap());

    testing_env!(context(store_account()).build());
    contract.finish_purchase(plan.purchase_id, plan.deposit, true);
    assert_eq!(transfers(), vec![(fee_collector(), 2)]);
}

#[test]
fn unknown_app_is_not_found() {
    let mut contract = new_contract();
    let err = buy(&mut contract, &buyer(), "ghost", 100).unwrap_err();
    assert!(matches!(err, AppStoreError::NotFound(_)));
}

#[test]
fn inactive_app_blocks_purchase_but_not_reads() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    testing_env!(context(owner()).build());
    contract.set_app_status("chat".into(), false).unwrap();

    let err = buy(&mut contract, &buyer(), "chat", 100).unwrap_err();
    assert_eq!(err, AppStoreError::Inactive("chat".into()));

    let app = contract.get_app("chat".into()).unwrap();
    assert!(!app.active);
    assert_eq!(contract.get_version("chat".into(), 0).unwrap().version_code, 1);
}

#[test]
fn inactive_check_precedes_already_purchased() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    buy_and_settle(&mut contract, &buyer(), "chat", 100);
    testing_env!(context(owner()).build());
    contract.set_app_status("chat".into(), false).unwrap();

    let err = buy(&mut contract, &buyer(), "chat", 100).unwrap_err();
    assert!(matches!(err, AppStoreError::Inactive(_)));
}

#[test]
fn buyer_locked_while_settlement_pending() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    register(&mut contract, "notes", 40);

    let plan = committed(buy(&mut contract, &buyer(), "chat", 100).unwrap());
    let err = buy(&mut contract, &buyer(), "notes", 40).unwrap_err();
    assert!(matches!(err, AppStoreError::PurchaseInFlight(_)));

    // Other buyers are unaffected.
    committed(buy(&mut contract, &other_buyer(), "notes", 40).unwrap());

    testing_env!(context(store_account()).build());
    contract.finish_purchase(plan.purchase_id, plan.deposit, true);
    committed(buy(&mut contract, &buyer(), "notes", 40).unwrap());
}

#[test]
fn different_buyers_each_purchase_once() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    buy_and_settle(&mut contract, &buyer(), "chat", 100);
    buy_and_settle(&mut contract, &other_buyer(), "chat", 120);

    let app = contract.get_app("chat".into()).unwrap();
    assert_eq!(app.total_downloads, 2);
    assert_eq!(app.total_revenue.0, 200);
    assert_ne!(
        contract.get_purchase(buyer(), "chat".into()).unwrap().unwrap().id,
        contract.get_purchase(other_buyer(), "chat".into()).unwrap().unwrap().id
    );
}

#[test]
fn publisher_may_buy_own_app() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    let plan = committed(buy(&mut contract, &publisher(), "chat", 100).unwrap());
    assert_eq!(plan.publisher, publisher());
    assert!(contract.has_purchased(publisher(), "chat".into()).unwrap());
}

#[test]
fn price_update_does_not_touch_existing_purchase() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    buy_and_settle(&mut contract, &buyer(), "chat", 100);

    testing_env!(context(publisher()).build());
    contract.update_price("chat".into(), U128(500)).unwrap();

    let purchase = contract.get_purchase(buyer(), "chat".into()).unwrap().unwrap();
    assert_eq!(purchase.price_paid.0, 100);
    assert_eq!(purchase.fee.0, 2);

    let plan = committed(buy(&mut contract, &other_buyer(), "chat", 500).unwrap());
    assert_eq!(plan.fee, 12);
    assert_eq!(plan.publisher_amount, 488);
}

#[test]
fn fee_change_applies_to_future_purchases_only() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 1_000);
    buy_and_settle(&mut contract, &buyer(), "chat", 1_000);

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_platform_fee(1_000).unwrap();

    let plan = committed(buy(&mut contract, &other_buyer(), "chat", 1_000).unwrap());
    assert_eq!(plan.fee, 100);
    assert_eq!(
        contract.get_purchase(buyer(), "chat".into()).unwrap().unwrap().fee.0,
        25
    );
}

#[test]
fn has_purchased_unknown_app_is_not_found() {
    let contract = new_contract();
    assert!(matches!(
        contract.has_purchased(buyer(), "ghost".into()),
        Err(AppStoreError::NotFound(_))
    ));
}

// --- free path ---

#[test]
fn free_app_downloads_repeatably_without_records() {
    let mut contract = new_contract();
    register(&mut contract, "free-app", 0);

    for (who, expected) in [(buyer(), 1), (other_buyer(), 2), (buyer(), 3)] {
        let outcome = buy(&mut contract, &who, "free-app", 0).unwrap();
        assert!(matches!(outcome, PurchaseOutcome::Downloaded { refund: 0 }));
        assert_eq!(
            contract.get_app("free-app".into()).unwrap().total_downloads,
            expected
        );
    }

    let app = contract.get_app("free-app".into()).unwrap();
    assert_eq!(app.total_downloads, 3);
    assert_eq!(app.total_revenue.0, 0);
    assert!(!contract.has_purchased(buyer(), "free-app".into()).unwrap());
    assert!(contract.get_purchase(other_buyer(), "free-app".into()).unwrap().is_none());
    assert_eq!(contract.next_purchase_id, 0);
}

#[test]
fn free_app_returns_attached_deposit() {
    let mut contract = new_contract();
    register(&mut contract, "free-app", 0);
    let outcome = buy(&mut contract, &buyer(), "free-app", 77).unwrap();
    assert!(matches!(outcome, PurchaseOutcome::Downloaded { refund: 77 }));
}

#[test]
fn free_app_inactive_blocks_download() {
    let mut contract = new_contract();
    register(&mut contract, "free-app", 0);
    testing_env!(context(owner()).build());
    contract.set_app_status("free-app".into(), false).unwrap();

    let err = buy(&mut contract, &buyer(), "free-app", 0).unwrap_err();
    assert!(matches!(err, AppStoreError::Inactive(_)));
    assert_eq!(contract.get_app("free-app".into()).unwrap().total_downloads, 0);
}

// --- public entrypoint ---

#[test]
fn purchase_app_entrypoint_free_returns_value() {
    let mut contract = new_contract();
    register(&mut contract, "free-app", 0);
    testing_env!(context(buyer()).build());
    let result = contract.purchase_app("free-app".into()).unwrap();
    assert!(matches!(result, PromiseOrValue::Value(true)));
    assert!(transfers().is_empty());
}

#[test]
fn purchase_app_entrypoint_free_returns_deposit_in_full() {
    let mut contract = new_contract();
    register(&mut contract, "free-app", 0);
    testing_env!(context_with_deposit(buyer(), 77).build());
    contract.purchase_app("free-app".into()).unwrap();
    assert_eq!(transfers(), vec![(buyer(), 77)]);
    assert!(!contract.has_purchased(buyer(), "free-app".into()).unwrap());
}

#[test]
fn purchase_app_entrypoint_paid_returns_promise() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);
    testing_env!(context_with_deposit(buyer(), 150).build());
    let result = contract.purchase_app("chat".into()).unwrap();
    assert!(matches!(result, PromiseOrValue::Promise(_)));
    assert!(contract.settlement_locks.contains(&buyer()));
    // Promises are scheduled when dropped.
    drop(result);

    // Only the publisher leg leaves before the callback runs.
    assert_eq!(transfers(), vec![(publisher(), 98)]);
    assert!(
        function_calls()
            .contains(&(store_account(), "resolve_app_purchase".to_string()))
    );
}

#[test]
fn buyer_pays_exactly_the_price() {
    let mut contract = new_contract();
    register(&mut contract, "chat", 100);

    testing_env!(context_with_deposit(buyer(), 150).build());
    drop(contract.purchase_app("chat".into()).unwrap());
    let mut sent = transfers();

    let purchase_id = contract.get_purchase(buyer(), "chat".into()).unwrap().unwrap().id;
    testing_env!(context(store_account()).build());
    assert!(contract.finish_purchase(purchase_id, 150, true));
    sent.extend(transfers());

    let paid_to = |account: AccountId| -> u128 {
        sent.iter().filter(|(to, _)| *to == account).map(|(_, amount)| amount).sum()
    };
    assert_eq!(paid_to(publisher()), 98);
    assert_eq!(paid_to(fee_collector()), 2);
    assert_eq!(150 - paid_to(buyer()), 100);
    assert_eq!(sent.iter().map(|(_, amount)| amount).sum::<u128>(), 150);
}
