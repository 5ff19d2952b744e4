use super::purchase_key;
use crate::*;

#[near]
impl Contract {
    /// True once a paid purchase has been accepted, including while its payout is
    /// still settling. Free downloads are never recorded.
    #[handle_result]
    pub fn has_purchased(&self, buyer_id: AccountId, slug: String) -> Result<bool, AppStoreError> {
        let app_id = self.resolve_app_id(&slug)?;
        Ok(self.purchase_ids.contains_key(&purchase_key(app_id, &buyer_id)))
    }

    #[handle_result]
    pub fn get_purchase(
        &self,
        buyer_id: AccountId,
        slug: String,
    ) -> Result<Option<Purchase>, AppStoreError> {
        let app_id = self.resolve_app_id(&slug)?;
        Ok(self.purchase_for(app_id, &buyer_id).cloned())
    }

    pub fn get_purchase_by_id(&self, purchase_id: u64) -> Option<Purchase> {
        self.purchases.get(&purchase_id).cloned()
    }
}
