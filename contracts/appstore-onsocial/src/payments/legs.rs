//! Outgoing transfers after a purchase settles. A leg that bounces is credited to
//! the recipient's unclaimed balance instead of being lost.

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[private]
    pub fn on_leg_settled(&mut self, recipient: AccountId, amount: U128) -> bool {
        let delivered =
            env::promise_results_count() == 1 && env::promise_result_checked(0, 64).is_ok();
        self.record_leg(&recipient, amount.0, delivered)
    }

    /// Pays out the caller's unclaimed balance. Requires 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn withdraw_unclaimed(&mut self) -> Result<Promise, AppStoreError> {
        check_one_yocto()?;
        self.internal_withdraw_unclaimed(&env::predecessor_account_id())
    }

    pub fn get_unclaimed(&self, account_id: AccountId) -> U128 {
        U128(self.unclaimed.get(&account_id).copied().unwrap_or(0))
    }
}

impl Contract {
    pub(crate) fn send_leg(&self, recipient: &AccountId, amount: u128) -> Promise {
        Promise::new(recipient.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_LEG_CALLBACK_TGAS))
                    .on_leg_settled(recipient.clone(), U128(amount)),
            )
    }

    pub(crate) fn record_leg(&mut self, recipient: &AccountId, amount: u128, delivered: bool) -> bool {
        if delivered {
            return true;
        }
        let balance = self
            .unclaimed
            .get(recipient)
            .copied()
            .unwrap_or(0)
            .saturating_add(amount);
        self.unclaimed.insert(recipient.clone(), balance);

        env::log_str(&format!(
            "WARN: transfer of {} to '{}' bounced; credited as unclaimed",
            amount, recipient
        ));
        events::emit_unclaimed_credited(recipient, amount, balance);
        false
    }

    pub(crate) fn internal_withdraw_unclaimed(
        &mut self,
        account_id: &AccountId,
    ) -> Result<Promise, AppStoreError> {
        let amount = self.unclaimed.remove(account_id).unwrap_or(0);
        if amount == 0 {
            return Err(AppStoreError::NotFound(format!(
                "No unclaimed balance for {}",
                account_id
            )));
        }
        events::emit_unclaimed_withdrawn(account_id, amount);
        Ok(self.send_leg(account_id, amount))
    }
}
