use crate::*;

#[near]
impl Contract {
    /// Callback after the publisher transfer. Success settles the purchase and
    /// pays the fee and overpayment legs; failure reverses the purchase and
    /// returns the whole deposit to the buyer.
    #[private]
    pub fn resolve_app_purchase(&mut self, purchase_id: u64, deposit: U128) -> bool {
        let publisher_paid =
            env::promise_results_count() == 1 && env::promise_result_checked(0, 64).is_ok();
        self.finish_purchase(purchase_id, deposit.0, publisher_paid)
    }
}

impl Contract {
    // Security boundary: runs after value left the contract and must not panic.
    pub(crate) fn finish_purchase(
        &mut self,
        purchase_id: u64,
        deposit: u128,
        publisher_paid: bool,
    ) -> bool {
        let Some(purchase) = self.purchases.get(&purchase_id).cloned() else {
            env::log_str(&format!(
                "WARN: resolve for unknown purchase {}",
                purchase_id
            ));
            return false;
        };
        self.settlement_locks.remove(&purchase.buyer_id);

        if !publisher_paid {
            self.reverse_purchase(&purchase);
            if deposit > 0 {
                let _ = self.send_leg(&purchase.buyer_id, deposit);
            }
            env::log_str(&format!(
                "WARN: publisher transfer for purchase {} failed; refunded {} to '{}'",
                purchase.id, deposit, purchase.buyer_id
            ));
            events::emit_app_purchase_failed(&purchase, deposit, "publisher_transfer_failed");
            return false;
        }

        let purchase = self.settle_purchase(purchase_id).unwrap_or(purchase);
        if purchase.fee.0 > 0 {
            let fee_collector = self.fee_collector.clone();
            let _ = self.send_leg(&fee_collector, purchase.fee.0);
        }
        let refund = deposit.saturating_sub(purchase.price_paid.0);
        if refund > 0 {
            let _ = self.send_leg(&purchase.buyer_id, refund);
        }

        events::emit_app_purchased(&purchase, refund);
        true
    }

    /// Removes a failed purchase and backs its deltas out of the app counters,
    /// leaving changes made by other purchases in the meantime intact.
    fn reverse_purchase(&mut self, purchase: &Purchase) {
        self.erase_purchase(purchase);
        if let Some(app) = self.apps.get_mut(purchase.app_id) {
            app.total_downloads = app.total_downloads.saturating_sub(1);
            app.total_revenue = U128(app.total_revenue.0.saturating_sub(purchase.price_paid.0));
        }
    }
}
