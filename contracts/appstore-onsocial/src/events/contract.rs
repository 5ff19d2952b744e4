use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_fee_collector_changed(
    owner_id: &AccountId,
    old_collector: &AccountId,
    new_collector: &AccountId,
) {
    EventBuilder::new(CONTRACT, "fee_collector_changed", owner_id)
        .field("old_collector", old_collector)
        .field("new_collector", new_collector)
        .emit();
}

pub fn emit_fee_config_updated(owner_id: &AccountId, old_fee_bps: u16, new_fee_bps: u16) {
    EventBuilder::new(CONTRACT, "fee_config_updated", owner_id)
        .field("old_platform_fee_bps", old_fee_bps as u32)
        .field("platform_fee_bps", new_fee_bps as u32)
        .emit();
}
