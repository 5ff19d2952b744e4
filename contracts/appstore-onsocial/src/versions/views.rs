use crate::validation::page;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn get_version(&self, slug: String, version_index: u32) -> Result<Version, AppStoreError> {
        let app_id = self.resolve_app_id(&slug)?;
        let count = self.get_version_count(slug)?;
        self.versions
            .get(&app_id)
            .and_then(|ledger| ledger.get(version_index))
            .cloned()
            .ok_or_else(|| AppStoreError::version_index_out_of_range(version_index, count))
    }

    #[handle_result]
    pub fn get_version_count(&self, slug: String) -> Result<u32, AppStoreError> {
        let app_id = self.resolve_app_id(&slug)?;
        Ok(self.versions.get(&app_id).map_or(0, |ledger| ledger.len()))
    }

    #[handle_result]
    pub fn get_versions(
        &self,
        slug: String,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Version>, AppStoreError> {
        let app_id = self.resolve_app_id(&slug)?;
        let Some(ledger) = self.versions.get(&app_id) else {
            return Ok(vec![]);
        };
        let (start, limit) = page(from_index, limit);
        Ok(ledger.iter().skip(start).take(limit).cloned().collect())
    }

    #[handle_result]
    pub fn get_latest_version(&self, slug: String) -> Result<Option<Version>, AppStoreError> {
        let app_id = self.resolve_app_id(&slug)?;
        Ok(self.versions.get(&app_id).and_then(|ledger| {
            ledger
                .len()
                .checked_sub(1)
                .and_then(|i| ledger.get(i))
                .cloned()
        }))
    }
}
