use crate::cache::{MAX_CATALOG_STALENESS, ReportCache};
use crate::errors::AppError;
use crate::models::ReportCatalog;
use crate::storage::CatalogSource;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Injected time source so cache-expiry tests do not have to sleep.
pub type Clock = Arc<dyn Fn() -> Instant + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CatalogSource>,
    pub cache: Arc<Mutex<ReportCache>>,
    pub clock: Clock,
}

impl AppState {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self::with_clock(source, Arc::new(Instant::now))
    }

    pub fn with_clock(source: Arc<dyn CatalogSource>, clock: Clock) -> Self {
        Self {
            source,
            cache: Arc::new(Mutex::new(ReportCache::new(MAX_CATALOG_STALENESS))),
            clock,
        }
    }

    /// Returns the current catalog snapshot, reloading it from the
    /// source first when the cached copy is stale. The cache lock is
    /// held across the reload, so concurrent requests that race past
    /// the expiry trigger exactly one load. A failed reload keeps the
    /// old snapshot and surfaces as this request's error.
    pub async fn ensure_fresh(&self) -> Result<Arc<ReportCatalog>, AppError> {
        let mut cache = self.cache.lock().await;
        if cache.is_stale((self.clock)()) {
            let catalog = self.source.load().await?;
            cache.install(catalog, (self.clock)());
        }
        Ok(cache.catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::time::Duration;

    struct FixtureSource {
        loads: AtomicUsize,
    }

    #[async_trait]
    impl CatalogSource for FixtureSource {
        async fn load(&self) -> Result<ReportCatalog, AppError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(ReportCatalog::default())
        }
    }

    fn test_state() -> (AppState, Arc<FixtureSource>, Arc<AtomicU64>) {
        let source = Arc::new(FixtureSource {
            loads: AtomicUsize::new(0),
        });
        let base = Instant::now();
        let offset_secs = Arc::new(AtomicU64::new(0));
        let offset = Arc::clone(&offset_secs);
        let clock: Clock =
            Arc::new(move || base + Duration::from_secs(offset.load(Ordering::SeqCst)));
        let state = AppState::with_clock(Arc::clone(&source) as Arc<dyn CatalogSource>, clock);
        (state, source, offset_secs)
    }

    #[tokio::test]
    async fn requests_inside_the_window_share_one_snapshot() {
        let (state, source, offset_secs) = test_state();

        let first = state.ensure_fresh().await.unwrap();
        offset_secs.store(10_799, Ordering::SeqCst);
        let second = state.ensure_fresh().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    struct FlakySource {
        loads: AtomicUsize,
    }

    #[async_trait]
    impl CatalogSource for FlakySource {
        async fn load(&self) -> Result<ReportCatalog, AppError> {
            if self.loads.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(ReportCatalog::default())
            } else {
                Err(AppError::server_error("catalog source unavailable"))
            }
        }
    }

    #[tokio::test]
    async fn failed_reload_surfaces_and_keeps_the_old_snapshot() {
        let source = Arc::new(FlakySource {
            loads: AtomicUsize::new(0),
        });
        let base = Instant::now();
        let offset_secs = Arc::new(AtomicU64::new(0));
        let offset = Arc::clone(&offset_secs);
        let clock: Clock =
            Arc::new(move || base + Duration::from_secs(offset.load(Ordering::SeqCst)));
        let state = AppState::with_clock(Arc::clone(&source) as Arc<dyn CatalogSource>, clock);

        let first = state.ensure_fresh().await.unwrap();

        offset_secs.store(10_800, Ordering::SeqCst);
        let err = state.ensure_fresh().await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        // The failed reload must not have touched the cache: back inside
        // the window the old snapshot is still served without a load.
        offset_secs.store(10_799, Ordering::SeqCst);
        let after = state.ensure_fresh().await.unwrap();
        assert!(Arc::ptr_eq(&first, &after));
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn expiry_triggers_exactly_one_reload() {
        let (state, source, offset_secs) = test_state();

        let first = state.ensure_fresh().await.unwrap();
        offset_secs.store(10_800, Ordering::SeqCst);
        let second = state.ensure_fresh().await.unwrap();
        let third = state.ensure_fresh().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&second, &third));
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }
}
