use crate::*;

use super::storage_byte_cost;

impl Contract {
    /// Charges `bytes_used` of new storage against the attached deposit and
    /// returns the excess to `payer`. Returns the amount refunded.
    pub(crate) fn charge_storage(
        &self,
        payer: &AccountId,
        bytes_used: u64,
        deposit: u128,
    ) -> Result<u128, AppStoreError> {
        let cost = bytes_used as u128 * storage_byte_cost();
        if deposit < cost {
            return Err(AppStoreError::InsufficientDeposit(format!(
                "Storage for {} bytes costs {} yoctoNEAR, attached {}",
                bytes_used, cost, deposit
            )));
        }
        let refund = deposit - cost;
        if refund > 0 {
            let _ = Promise::new(payer.clone()).transfer(NearToken::from_yoctonear(refund));
        }
        Ok(refund)
    }

    /// Runs `op`, measures the storage it added, and charges it to `payer`.
    pub(crate) fn with_storage_charge<T>(
        &mut self,
        payer: &AccountId,
        deposit: u128,
        op: impl FnOnce(&mut Self) -> Result<T, AppStoreError>,
    ) -> Result<T, AppStoreError> {
        let before = self.storage_usage_flushed();
        let value = op(self)?;
        let bytes_used = self.storage_usage_flushed().saturating_sub(before);
        self.charge_storage(payer, bytes_used, deposit)?;
        Ok(value)
    }
}
