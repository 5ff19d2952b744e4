use crate::*;

impl Contract {
    // Storage accounting invariant: flush deferred writes before measuring usage.
    pub(crate) fn flush_state(&mut self) {
        self.apps.flush();
        self.app_ids_by_slug.flush();
        self.apps_by_publisher.flush();
        self.versions.flush();
        self.purchases.flush();
        self.purchase_ids.flush();
        self.unclaimed.flush();
    }

    #[inline]
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.flush_state();
        env::storage_usage()
    }
}
