use near_sdk::AccountId;

use super::PURCHASE;
use super::builder::EventBuilder;
use crate::Purchase;

pub fn emit_app_downloaded(buyer_id: &AccountId, slug: &str, total_downloads: u64) {
    EventBuilder::new(PURCHASE, "app_downloaded", buyer_id)
        .field("slug", slug)
        .field("buyer_id", buyer_id)
        .field("total_downloads", total_downloads)
        .emit();
}

pub fn emit_app_purchased(purchase: &Purchase, refund: u128) {
    EventBuilder::new(PURCHASE, "app_purchased", &purchase.buyer_id)
        .field("purchase_id", purchase.id)
        .field("slug", &purchase.slug)
        .field("buyer_id", &purchase.buyer_id)
        .field("price", purchase.price_paid)
        .field("fee", purchase.fee)
        .field("publisher_amount", purchase.publisher_amount)
        .field_opt("refund", (refund > 0).then_some(refund))
        .emit();
}

pub fn emit_app_purchase_failed(purchase: &Purchase, refunded: u128, reason: &str) {
    EventBuilder::new(PURCHASE, "app_purchase_failed", &purchase.buyer_id)
        .field("purchase_id", purchase.id)
        .field("slug", &purchase.slug)
        .field("buyer_id", &purchase.buyer_id)
        .field("attempted_price", purchase.price_paid)
        .field("refunded", refunded)
        .field("reason", reason)
        .emit();
}

pub fn emit_unclaimed_credited(account_id: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(PURCHASE, "unclaimed_credited", account_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_unclaimed_withdrawn(account_id: &AccountId, amount: u128) {
    EventBuilder::new(PURCHASE, "unclaimed_withdrawn", account_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .emit();
}
