use crate::fees::split_price;
use crate::purchases::purchase_key;
use crate::*;

/// A purchase that passed every check. Committing it cannot fail.
#[derive(Clone, Debug)]
pub(crate) struct PurchasePlan {
    pub purchase_id: u64,
    pub app_id: AppId,
    pub slug: String,
    pub buyer_id: AccountId,
    pub publisher: AccountId,
    pub price: u128,
    pub fee: u128,
    pub publisher_amount: u128,
    pub deposit: u128,
    next_purchase_id: u64,
    total_downloads: u64,
    total_revenue: u128,
}

impl Contract {
    /// Validates a paid purchase and precomputes every value it will write.
    /// Reads only; nothing is mutated until `commit_purchase`.
    pub(crate) fn stage_purchase(
        &self,
        buyer_id: &AccountId,
        app: &App,
        deposit: u128,
    ) -> Result<PurchasePlan, AppStoreError> {
        if self.purchase_ids.contains_key(&purchase_key(app.id, buyer_id)) {
            return Err(AppStoreError::AlreadyPurchased(format!(
                "'{}' already owns '{}'",
                buyer_id, app.slug
            )));
        }
        if self.settlement_locks.contains(buyer_id) {
            return Err(AppStoreError::PurchaseInFlight(format!(
                "'{}' has a purchase awaiting settlement",
                buyer_id
            )));
        }
        let price = app.price.0;
        if deposit < price {
            return Err(AppStoreError::InsufficientPayment(format!(
                "price is {} yoctoNEAR, attached {}",
                price, deposit
            )));
        }

        let overflow = || AppStoreError::InternalError("Counter overflow".into());
        let total_downloads = app.total_downloads.checked_add(1).ok_or_else(overflow)?;
        let total_revenue = app.total_revenue.0.checked_add(price).ok_or_else(overflow)?;
        let purchase_id = self.next_purchase_id;
        let next_purchase_id = purchase_id.checked_add(1).ok_or_else(overflow)?;

        let split = split_price(price, self.fee_config.platform_fee_bps);
        Ok(PurchasePlan {
            purchase_id,
            app_id: app.id,
            slug: app.slug.clone(),
            buyer_id: buyer_id.clone(),
            publisher: app.publisher.clone(),
            price,
            fee: split.fee,
            publisher_amount: split.publisher_amount,
            deposit,
            next_purchase_id,
            total_downloads,
            total_revenue,
        })
    }

    /// Applies a staged plan: purchase record, counters and the buyer's
    /// settlement lock land together.
    pub(crate) fn commit_purchase(&mut self, plan: &PurchasePlan) {
        self.next_purchase_id = plan.next_purchase_id;
        self.record_purchase(Purchase {
            id: plan.purchase_id,
            app_id: plan.app_id,
            slug: plan.slug.clone(),
            buyer_id: plan.buyer_id.clone(),
            price_paid: U128(plan.price),
            fee: U128(plan.fee),
            publisher_amount: U128(plan.publisher_amount),
            timestamp: env::block_timestamp(),
            status: PurchaseStatus::Pending,
        });
        if let Some(app) = self.apps.get_mut(plan.app_id) {
            app.total_downloads = plan.total_downloads;
            app.total_revenue = U128(plan.total_revenue);
        }
        self.settlement_locks.insert(plan.buyer_id.clone());
    }
}
