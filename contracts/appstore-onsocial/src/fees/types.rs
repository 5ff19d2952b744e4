use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct FeeConfig {
    pub platform_fee_bps: u16,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            platform_fee_bps: DEFAULT_PLATFORM_FEE_BPS,
        }
    }
}

impl FeeConfig {
    pub fn validate_fee_bps(fee_bps: u16) -> Result<(), AppStoreError> {
        if fee_bps > MAX_PLATFORM_FEE_BPS {
            return Err(AppStoreError::InvalidInput(format!(
                "platform_fee_bps must be <= {MAX_PLATFORM_FEE_BPS}"
            )));
        }
        Ok(())
    }
}

/// `fee + publisher_amount == price`, always.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FeeSplit {
    pub fee: u128,
    pub publisher_amount: u128,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseQuote {
    pub price: U128,
    pub fee: U128,
    pub publisher_amount: U128,
}
