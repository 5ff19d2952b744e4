use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// `fee_collector` defaults to `owner_id`, `platform_fee_bps` to 250 (2.5%).
    #[init]
    pub fn new(
        owner_id: AccountId,
        fee_collector: Option<AccountId>,
        platform_fee_bps: Option<u16>,
    ) -> Self {
        let platform_fee_bps = platform_fee_bps.unwrap_or(DEFAULT_PLATFORM_FEE_BPS);
        assert!(
            platform_fee_bps <= MAX_PLATFORM_FEE_BPS,
            "platform_fee_bps must be <= {}",
            MAX_PLATFORM_FEE_BPS
        );
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            fee_collector: fee_collector.unwrap_or_else(|| owner_id.clone()),
            owner_id,
            fee_config: FeeConfig { platform_fee_bps },
            apps: Vector::new(StorageKey::Apps),
            app_ids_by_slug: LookupMap::new(StorageKey::AppIdsBySlug),
            apps_by_publisher: LookupMap::new(StorageKey::AppsByPublisher),
            versions: LookupMap::new(StorageKey::Versions),
            purchases: LookupMap::new(StorageKey::Purchases),
            purchase_ids: LookupMap::new(StorageKey::PurchaseIds),
            next_purchase_id: 0,
            settlement_locks: LookupSet::new(StorageKey::SettlementLocks),
            unclaimed: LookupMap::new(StorageKey::Unclaimed),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), AppStoreError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(AppStoreError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    #[payable]
    #[handle_result]
    pub fn set_fee_collector(&mut self, fee_collector: AccountId) -> Result<(), AppStoreError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_collector = self.fee_collector.clone();
        self.fee_collector = fee_collector;
        events::emit_fee_collector_changed(&self.owner_id, &old_collector, &self.fee_collector);
        Ok(())
    }

    /// Applies to purchases made after the change; recorded purchases keep their fee.
    #[payable]
    #[handle_result]
    pub fn set_platform_fee(&mut self, platform_fee_bps: u16) -> Result<(), AppStoreError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        FeeConfig::validate_fee_bps(platform_fee_bps)?;
        let old_fee_bps = self.fee_config.platform_fee_bps;
        self.fee_config.platform_fee_bps = platform_fee_bps;
        events::emit_fee_config_updated(&self.owner_id, old_fee_bps, platform_fee_bps);
        Ok(())
    }

    pub fn get_contract_version(&self) -> String {
        self.version.clone()
    }
}
