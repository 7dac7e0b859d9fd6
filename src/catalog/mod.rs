//! In-memory catalog store: load-once retrieval and read-only queries.
//!
//! The store is an explicitly constructed instance shared as
//! `Arc<CatalogStore>` between the runtime and background workers; there is
//! no process-wide singleton. The catalog is immutable after its single
//! load, so every query is race-free by construction.

use tokio::sync::Mutex;

use crate::state::{CatalogStats, FilterCriteria, Product};

pub mod query;
pub mod source;
pub mod stats;

pub use source::{CatalogSource, LoadError};

/// Result of the one retrieval attempt this session.
///
/// A failed retrieval still produces an outcome (the loaded-empty state),
/// so queries never block or error after a bad fetch.
#[derive(Clone, Debug)]
struct LoadOutcome {
    /// Products in document order (empty after a failed retrieval).
    products: Vec<Product>,
    /// The retrieval failure, when there was one.
    error: Option<LoadError>,
}

/// What: Load-once product catalog with read-only query methods.
///
/// Inputs:
/// - Constructed from a [`CatalogSource`]; shared via `Arc`.
///
/// Output:
/// - Query methods returning owned snapshots of the immutable catalog.
///
/// Details:
/// - The first `load` performs the retrieval; concurrent callers queue on
///   the slot mutex and observe the same outcome (single-flight).
/// - Retrieval failure latches loaded-empty: queries answer with empty data
///   while `load_result` preserves the failure for callers that care.
#[derive(Debug)]
pub struct CatalogStore {
    /// Where the catalog document lives.
    source: CatalogSource,
    /// Single-flight load slot; `None` until the first load completes.
    slot: Mutex<Option<LoadOutcome>>,
}

impl CatalogStore {
    /// Construct a store for `source`; nothing is fetched until first use.
    #[must_use]
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            slot: Mutex::new(None),
        }
    }

    /// Resolve the load slot, fetching on first call only.
    async fn outcome(&self) -> LoadOutcome {
        let mut slot = self.slot.lock().await;
        if let Some(out) = slot.as_ref() {
            return out.clone();
        }
        let out = match source::fetch(&self.source).await {
            Ok(products) => {
                tracing::info!(
                    source = %self.source.describe(),
                    count = products.len(),
                    "catalog loaded"
                );
                LoadOutcome {
                    products,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "catalog load failed; continuing with empty catalog"
                );
                LoadOutcome {
                    products: Vec::new(),
                    error: Some(e),
                }
            }
        };
        *slot = Some(out.clone());
        out
    }

    /// What: Idempotent load returning the catalog (empty after a failure).
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - Products in document order; retrieval happens at most once per
    ///   session regardless of call count.
    pub async fn load(&self) -> Vec<Product> {
        self.outcome().await.products
    }

    /// What: Load with the failure preserved.
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - `Ok(products)` on a clean load, `Err(LoadError)` when the one
    ///   retrieval failed. Internal code and tests can tell a failed load
    ///   apart from a genuinely empty catalog, while the query methods keep
    ///   degrading to empty.
    pub async fn load_result(&self) -> Result<Vec<Product>, LoadError> {
        let out = self.outcome().await;
        match out.error {
            Some(e) => Err(e),
            None => Ok(out.products),
        }
    }

    /// What: Discard the cached outcome and fetch afresh.
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - The fresh load result.
    ///
    /// Details:
    /// - Only the Error-state retry affordance calls this; `load` stays
    ///   idempotent for every other caller.
    pub async fn reload(&self) -> Result<Vec<Product>, LoadError> {
        {
            let mut slot = self.slot.lock().await;
            *slot = None;
        }
        self.load_result().await
    }

    /// Full catalog in document order (loads on first use).
    pub async fn get_all(&self) -> Vec<Product> {
        self.load().await
    }

    /// Products in `category`; `"all"` or empty returns the whole catalog.
    pub async fn get_by_category(&self, category: &str) -> Vec<Product> {
        query::by_category(&self.load().await, category)
    }

    /// Featured subsequence, order preserved.
    pub async fn get_featured(&self) -> Vec<Product> {
        query::featured(&self.load().await)
    }

    /// Case-insensitive substring search; blank returns the whole catalog.
    pub async fn search(&self, text: &str) -> Vec<Product> {
        query::search(&self.load().await, text)
    }

    /// First product with exactly this id, or `None`.
    pub async fn get_by_id(&self, id: &str) -> Option<Product> {
        query::find_by_id(&self.load().await, id).cloned()
    }

    /// Conjunctive category → search → rating filter.
    pub async fn filter(&self, criteria: &FilterCriteria) -> Vec<Product> {
        query::apply(&self.load().await, criteria)
    }

    /// Deduplicated, lexicographically sorted category names.
    pub async fn categories(&self) -> Vec<String> {
        query::categories(&self.load().await)
    }

    /// Aggregate catalog statistics.
    pub async fn statistics(&self) -> CatalogStats {
        stats::statistics(&self.load().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(file: &mut tempfile::NamedTempFile, ids: &[&str]) {
        let products: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| serde_json::json!({"id": id, "title": id.to_uppercase()}))
            .collect();
        let doc = serde_json::json!({ "products": products });
        file.as_file_mut().set_len(0).expect("truncate");
        let text = serde_json::to_string(&doc).expect("serialize");
        std::fs::write(file.path(), text).expect("write");
        file.as_file_mut().flush().expect("flush");
    }

    fn store_for(file: &tempfile::NamedTempFile) -> CatalogStore {
        CatalogStore::new(CatalogSource::File(file.path().to_path_buf()))
    }

    #[tokio::test]
    /// What: Load is idempotent; retrieval happens at most once
    ///
    /// - Input: Load, mutate the source file, load again
    /// - Output: Second load still returns the first snapshot; `reload`
    ///   picks up the mutation
    async fn store_load_is_idempotent() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write_catalog(&mut file, &["p1", "p2"]);
        let store = store_for(&file);

        assert_eq!(store.load().await.len(), 2);
        write_catalog(&mut file, &["p1", "p2", "p3"]);
        assert_eq!(store.load().await.len(), 2);
        assert_eq!(store.get_all().await.len(), 2);

        let fresh = store.reload().await.expect("reload");
        assert_eq!(fresh.len(), 3);
    }

    #[tokio::test]
    /// What: Concurrent first loads observe one shared outcome
    ///
    /// - Input: Two `load` futures joined before the slot is filled
    /// - Output: Identical snapshots from a single retrieval
    async fn store_single_flight_load() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write_catalog(&mut file, &["p1"]);
        let store = std::sync::Arc::new(store_for(&file));

        let (a, b) = tokio::join!(store.load(), store.load());
        assert_eq!(a, b);
        assert_eq!(a.len(), 1);
    }

    #[tokio::test]
    /// What: Retrieval failure latches loaded-empty without propagating
    ///
    /// - Input: Malformed catalog file
    /// - Output: `get_all` empty, queries answer, `load_result` carries the
    ///   Malformed error on every call
    async fn store_failure_latches_empty() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        std::fs::write(file.path(), "this is not json").expect("write");
        let store = store_for(&file);

        assert!(store.get_all().await.is_empty());
        assert!(store.search("anything").await.is_empty());
        assert!(store.get_by_id("p1").await.is_none());
        assert_eq!(store.statistics().await.total_products, 0);
        assert!(matches!(store.load_result().await, Err(LoadError::Malformed(_))));
        // Still latched on a second look.
        assert!(matches!(store.load_result().await, Err(LoadError::Malformed(_))));
    }

    #[tokio::test]
    /// What: Missing source maps to Io and an empty catalog
    ///
    /// - Input: Store pointed at a nonexistent path
    /// - Output: Empty `get_all`; `load_result` is `Err(Io)`
    async fn store_missing_source_is_empty() {
        let store = CatalogStore::new(CatalogSource::File("/nonexistent/cat.json".into()));
        assert!(store.get_all().await.is_empty());
        assert!(matches!(store.load_result().await, Err(LoadError::Io(_))));
    }

    #[tokio::test]
    /// What: Id lookup hits and misses through the store
    ///
    /// - Input: Catalog with p1/p2; lookups for "p1" and "missing"
    /// - Output: Product for "p1"; `None` (no error) for "missing"
    async fn store_get_by_id_hit_and_miss() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write_catalog(&mut file, &["p1", "p2"]);
        let store = store_for(&file);

        let hit = store.get_by_id("p1").await.expect("present");
        assert_eq!(hit.title, "P1");
        assert!(store.get_by_id("missing").await.is_none());
    }

    #[tokio::test]
    /// What: Reload after failure recovers once the source is fixed
    ///
    /// - Input: Malformed file, then a valid rewrite plus `reload`
    /// - Output: Error first, two products after the retry
    async fn store_reload_recovers_from_failure() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        std::fs::write(file.path(), "{broken").expect("write");
        let store = store_for(&file);
        assert!(store.load_result().await.is_err());

        write_catalog(&mut file, &["p1", "p2"]);
        let fresh = store.reload().await.expect("recovered");
        assert_eq!(fresh.len(), 2);
        assert!(store.load_result().await.is_ok());
    }
}
