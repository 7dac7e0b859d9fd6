//! Query dispatch towards the debounced search worker.

use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput};

/// Build a `QueryInput` from the current criteria with a fresh id.
fn next_query(app: &mut AppState, reload: bool) -> QueryInput {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    QueryInput {
        id,
        criteria: app.criteria.clone(),
        featured_only: app.featured_only,
        reload,
    }
}

/// What: Send the current criteria over the query channel with a fresh id.
///
/// Inputs:
/// - `app`: Mutable state; advances `next_query_id` and `latest_query_id`.
/// - `query_tx`: Channel to the search worker.
///
/// Output:
/// - Enqueues a `QueryInput`; the id lets the event loop discard stale
///   outcomes when bursts of keystrokes overlap.
///
/// Details:
/// - Also flips the results area into `Loading`; the worker's debounce
///   window decides which of a burst of queries actually runs.
pub fn send_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let q = next_query(app, false);
    app.view = crate::state::ResultsView::Loading;
    let _ = query_tx.send(q);
}

/// What: Re-issue the current criteria after a catalog reload.
///
/// Inputs:
/// - `app`: Mutable state; advances the query ids.
/// - `query_tx`: Channel to the search worker.
///
/// Output:
/// - Enqueues a reloading `QueryInput` (the Error-state retry affordance).
pub fn send_retry_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let q = next_query(app, true);
    app.view = crate::state::ResultsView::Loading;
    let _ = query_tx.send(q);
}
