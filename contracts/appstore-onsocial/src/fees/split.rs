use primitive_types::U256;

use super::types::FeeSplit;
use crate::BASIS_POINTS;

/// `fee = floor(price * fee_bps / 10_000)`; the publisher gets the remainder.
pub(crate) fn split_price(price: u128, fee_bps: u16) -> FeeSplit {
    let fee_bps = fee_bps.min(BASIS_POINTS);
    let fee = (U256::from(price) * U256::from(fee_bps) / U256::from(BASIS_POINTS)).as_u128();
    FeeSplit {
        fee,
        publisher_amount: price - fee,
    }
}
