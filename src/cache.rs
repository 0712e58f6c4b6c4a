use crate::models::ReportCatalog;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Reports are regenerated by a batch job; reload the catalog at most
/// every 3 hours.
pub const MAX_CATALOG_STALENESS: Duration = Duration::from_secs(3 * 60 * 60);

/// In-memory snapshot of the report catalog. The catalog is replaced
/// wholesale: a new `Arc` is built off to the side and swapped in, so
/// requests holding an older snapshot keep reading a consistent one.
#[derive(Debug)]
pub struct ReportCache {
    max_staleness: Duration,
    last_update: Option<Instant>,
    catalog: Arc<ReportCatalog>,
}

impl ReportCache {
    pub fn new(max_staleness: Duration) -> Self {
        Self {
            max_staleness,
            last_update: None,
            catalog: Arc::new(ReportCatalog::default()),
        }
    }

    /// True when the catalog has never been loaded or the last load is
    /// older than the staleness threshold.
    pub fn is_stale(&self, now: Instant) -> bool {
        match self.last_update {
            None => true,
            Some(loaded_at) => now.duration_since(loaded_at) >= self.max_staleness,
        }
    }

    pub fn install(&mut self, catalog: ReportCatalog, now: Instant) {
        self.catalog = Arc::new(catalog);
        self.last_update = Some(now);
    }

    pub fn catalog(&self) -> Arc<ReportCatalog> {
        Arc::clone(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cache_is_stale_until_first_install() {
        let cache = ReportCache::new(MAX_CATALOG_STALENESS);
        assert!(cache.is_stale(Instant::now()));
    }

    #[test]
    fn installed_catalog_stays_fresh_inside_the_window() {
        let mut cache = ReportCache::new(MAX_CATALOG_STALENESS);
        let loaded_at = Instant::now();
        cache.install(ReportCatalog::default(), loaded_at);

        assert!(!cache.is_stale(loaded_at));
        assert!(!cache.is_stale(loaded_at + Duration::from_secs(10_799)));
        assert!(cache.is_stale(loaded_at + Duration::from_secs(10_800)));
    }

    #[test]
    fn install_swaps_the_snapshot() {
        let mut cache = ReportCache::new(MAX_CATALOG_STALENESS);
        let now = Instant::now();
        cache.install(ReportCatalog::default(), now);
        let first = cache.catalog();

        assert!(Arc::ptr_eq(&first, &cache.catalog()));
        cache.install(ReportCatalog::default(), now);
        assert!(!Arc::ptr_eq(&first, &cache.catalog()));
    }
}
