//! Background workers: the terminal event reader thread and the debounced
//! search worker.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::catalog::CatalogStore;
use crate::state::{QueryInput, SearchOutcome};

/// What: Evaluate one query against the store.
///
/// Inputs:
/// - `store`: Shared catalog store.
/// - `q`: Query to evaluate (criteria, featured flag, reload flag).
///
/// Output:
/// - `SearchOutcome` echoing the query id: matching products on success, a
///   user-facing message when the catalog load failed.
///
/// Details:
/// - A reloading query resets the store first (the retry affordance).
/// - A failed load surfaces as `Err` here so the UI can offer the retry,
///   while `CatalogStore` queries keep degrading to empty for everyone else.
async fn evaluate_query(store: &CatalogStore, q: &QueryInput) -> SearchOutcome {
    if q.reload {
        if let Err(e) = store.reload().await {
            return SearchOutcome {
                id: q.id,
                result: Err(e.to_string()),
            };
        }
    }
    match store.load_result().await {
        Err(e) => SearchOutcome {
            id: q.id,
            result: Err(e.to_string()),
        },
        Ok(_) => {
            let mut items = if q.criteria.is_unconstrained() {
                store.get_all().await
            } else {
                store.filter(&q.criteria).await
            };
            if q.featured_only {
                items.retain(|p| p.featured);
            }
            SearchOutcome {
                id: q.id,
                result: Ok(items),
            }
        }
    }
}

/// What: Spawn the debounced search worker.
///
/// Inputs:
/// - `store`: Shared catalog store.
/// - `query_rx`: Incoming queries from the event layer.
/// - `results_tx`: Outcomes back to the event loop.
/// - `debounce_ms`: Quiescent window; within it, newer queries replace
///   pending ones.
///
/// Details:
/// - Each received query starts an inner collapse loop: arrivals inside the
///   window replace the pending query and restart the timer, so exactly one
///   evaluation runs per burst, carrying the final keystroke's criteria.
pub fn spawn_search_worker(
    store: Arc<CatalogStore>,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    results_tx: mpsc::UnboundedSender<SearchOutcome>,
    debounce_ms: u64,
) {
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            loop {
                select! {
                    Some(new_q) = query_rx.recv() => { latest = new_q; }
                    () = sleep(Duration::from_millis(debounce_ms)) => { break; }
                }
            }
            let outcome = evaluate_query(&store, &latest).await;
            if results_tx.send(outcome).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the blocking thread that reads terminal events.
///
/// Inputs:
/// - `headless`: Skip spawning entirely (test mode without a terminal).
/// - `event_tx`: Channel towards the event loop.
/// - `cancelled`: Cooperative stop flag checked between polls.
///
/// Details:
/// - Polls with a short timeout so the thread can notice cancellation
///   promptly instead of blocking in `read` forever.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // transient read errors are ignored
                    }
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}
