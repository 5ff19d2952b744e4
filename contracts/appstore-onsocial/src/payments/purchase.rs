use super::PurchasePlan;
use crate::guards::check_active;
use crate::*;

#[derive(Debug)]
pub(crate) enum PurchaseOutcome {
    /// Free app: download counted, nothing recorded. `refund` is the whole deposit.
    Downloaded { refund: u128 },
    /// Paid app: purchase committed, payout not yet sent.
    Committed(PurchasePlan),
}

#[near]
impl Contract {
    /// Buys (or, for free apps, downloads) `slug` with the attached deposit.
    /// Any amount above the price is refunded.
    #[payable]
    #[handle_result]
    pub fn purchase_app(&mut self, slug: String) -> Result<PromiseOrValue<bool>, AppStoreError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        match self.internal_purchase_app(&buyer_id, &slug, deposit)? {
            PurchaseOutcome::Downloaded { refund } => {
                if refund > 0 {
                    let _ = self.send_leg(&buyer_id, refund);
                }
                Ok(PromiseOrValue::Value(true))
            }
            PurchaseOutcome::Committed(plan) => {
                Ok(PromiseOrValue::Promise(self.pay_publisher(&plan)))
            }
        }
    }
}

impl Contract {
    pub(crate) fn internal_purchase_app(
        &mut self,
        buyer_id: &AccountId,
        slug: &str,
        deposit: u128,
    ) -> Result<PurchaseOutcome, AppStoreError> {
        let app = self.app_by_slug(slug)?;
        check_active(app)?;

        if app.is_free() {
            let app_id = app.id;
            let total_downloads = app
                .total_downloads
                .checked_add(1)
                .ok_or_else(|| AppStoreError::InternalError("Counter overflow".into()))?;
            if let Some(app) = self.apps.get_mut(app_id) {
                app.total_downloads = total_downloads;
            }
            events::emit_app_downloaded(buyer_id, slug, total_downloads);
            return Ok(PurchaseOutcome::Downloaded { refund: deposit });
        }

        let plan = self.stage_purchase(buyer_id, app, deposit)?;
        // State/accounting invariant: commit before any value leaves the contract;
        // `resolve_app_purchase` undoes it if the publisher transfer fails.
        self.commit_purchase(&plan);
        Ok(PurchaseOutcome::Committed(plan))
    }

    fn pay_publisher(&self, plan: &PurchasePlan) -> Promise {
        Promise::new(plan.publisher.clone())
            .transfer(NearToken::from_yoctonear(plan.publisher_amount))
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_PURCHASE_TGAS))
                    .resolve_app_purchase(plan.purchase_id, U128(plan.deposit)),
            )
    }
}
