use crate::*;

pub(crate) fn purchase_key(app_id: AppId, buyer_id: &AccountId) -> String {
    format!("{}{}{}", app_id, DELIMETER, buyer_id)
}

impl Contract {
    pub(crate) fn purchase_for(&self, app_id: AppId, buyer_id: &AccountId) -> Option<&Purchase> {
        self.purchase_ids
            .get(&purchase_key(app_id, buyer_id))
            .and_then(|id| self.purchases.get(id))
    }

    pub(crate) fn record_purchase(&mut self, purchase: Purchase) {
        self.purchase_ids
            .insert(purchase_key(purchase.app_id, &purchase.buyer_id), purchase.id);
        self.purchases.insert(purchase.id, purchase);
    }

    /// Marks a pending purchase as settled. Returns the settled record.
    pub(crate) fn settle_purchase(&mut self, purchase_id: u64) -> Option<Purchase> {
        let purchase = self.purchases.get_mut(&purchase_id)?;
        purchase.status = PurchaseStatus::Settled;
        Some(purchase.clone())
    }

    /// Drops a purchase that never settled, freeing the (app, buyer) pair.
    pub(crate) fn erase_purchase(&mut self, purchase: &Purchase) {
        self.purchases.remove(&purchase.id);
        self.purchase_ids
            .remove(&purchase_key(purchase.app_id, &purchase.buyer_id));
    }
}
