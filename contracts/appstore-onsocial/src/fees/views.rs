use super::split_price;
use crate::*;

#[near]
impl Contract {
    pub fn get_fee_config(&self) -> &FeeConfig {
        &self.fee_config
    }

    pub fn get_fee_collector(&self) -> AccountId {
        self.fee_collector.clone()
    }

    /// What a purchase of `slug` would cost right now, split by recipient.
    #[handle_result]
    pub fn quote_purchase(&self, slug: String) -> Result<PurchaseQuote, AppStoreError> {
        let price = self.app_by_slug(&slug)?.price.0;
        let split = split_price(price, self.fee_config.platform_fee_bps);
        Ok(PurchaseQuote {
            price: U128(price),
            fee: U128(split.fee),
            publisher_amount: U128(split.publisher_amount),
        })
    }
}
