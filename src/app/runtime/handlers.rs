//! Event-loop message handlers.

use crate::catalog::CatalogStore;
use crate::state::{AppState, Product, SearchOutcome};

/// What: Fold a search outcome into the view state.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `outcome`: Worker result for some query id.
///
/// Output:
/// - `true` when applied (fresh id), `false` when dropped as stale.
pub fn handle_search_outcome(app: &mut AppState, outcome: SearchOutcome) -> bool {
    crate::logic::apply_search_outcome(app, outcome)
}

/// What: Refresh the category strip and footer statistics from the store.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `store`: Shared catalog store (already loaded by the query that
///   triggered this).
///
/// Output:
/// - Updates `categories` (clamping the category cursor if the list shrank)
///   and `stats`.
pub async fn refresh_catalog_meta(app: &mut AppState, store: &CatalogStore) {
    app.categories = store.categories().await;
    if app.category_index > app.categories.len() {
        app.category_index = 0;
        app.criteria.category = "all".to_string();
    }
    app.stats = Some(store.statistics().await);
}

/// What: Open the review modal for a resolved product lookup.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `found`: Store lookup result for `id`.
/// - `id`: Requested product id (for the log line).
///
/// Output:
/// - Opens the modal on a hit; logs and leaves all state untouched on a
///   miss.
pub fn handle_open_review(app: &mut AppState, found: Option<Product>, id: &str) {
    match found {
        Some(product) => {
            tracing::debug!(%id, "opening review modal");
            app.modal.open_review(product);
        }
        None => {
            tracing::warn!(%id, "review requested for unknown product id");
        }
    }
}
