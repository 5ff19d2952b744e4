use crate::validation::page;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn get_app(&self, slug: String) -> Result<App, AppStoreError> {
        self.app_by_slug(&slug).cloned()
    }

    pub fn get_app_count(&self) -> u32 {
        self.apps.len()
    }

    pub fn get_apps(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<App> {
        let (start, limit) = page(from_index, limit);
        self.apps.iter().skip(start).take(limit).cloned().collect()
    }

    pub fn get_apps_by_publisher(
        &self,
        publisher: AccountId,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<App> {
        let Some(app_ids) = self.apps_by_publisher.get(&publisher) else {
            return vec![];
        };
        let (start, limit) = page(from_index, limit);
        app_ids
            .iter()
            .skip(start)
            .filter_map(|app_id| self.apps.get(*app_id).cloned())
            .take(limit)
            .collect()
    }
}
