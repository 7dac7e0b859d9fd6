//! Application of search outcomes to view state.

use crate::state::{AppState, ResultsView, SearchOutcome};

/// What: Fold a worker outcome into the view state.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `outcome`: Result for some previously issued query id.
///
/// Output:
/// - `true` when the outcome was applied; `false` when it was stale.
///
/// Details:
/// - Outcomes whose id does not match `latest_query_id` are dropped, so a
///   slow early query can never overwrite a faster later one.
/// - Success transitions to `Showing`/`Empty` via
///   [`AppState::set_results`]; failure transitions to `Error` with the
///   worker's message and leaves the previous results untouched for the
///   retry to replace.
pub fn apply_search_outcome(app: &mut AppState, outcome: SearchOutcome) -> bool {
    if outcome.id != app.latest_query_id {
        tracing::debug!(
            id = outcome.id,
            latest = app.latest_query_id,
            "discarding stale search outcome"
        );
        return false;
    }
    match outcome.result {
        Ok(products) => app.set_results(products),
        Err(message) => {
            tracing::warn!(%message, "query failed");
            app.view = ResultsView::Error { message };
        }
    }
    true
}
