//! Channel definitions for runtime communication.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::catalog::CatalogStore;
use crate::state::{QueryInput, SearchOutcome};

use super::workers::spawn_search_worker;

/// What: Channel bundle connecting the event loop to its workers.
///
/// Details:
/// - Constructing the bundle also spawns the debounced search worker, which
///   owns the query receiver for its lifetime.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of the terminal event stream.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Cooperative stop flag for the reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Queries towards the debounced search worker.
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    /// Outcomes coming back from the search worker.
    pub results_rx: mpsc::UnboundedReceiver<SearchOutcome>,
    /// Product ids whose review modal should open.
    pub open_tx: mpsc::UnboundedSender<String>,
    /// Receiver side of the review-open requests.
    pub open_rx: mpsc::UnboundedReceiver<String>,
}

impl Channels {
    /// What: Create all channels and spawn the search worker.
    ///
    /// Inputs:
    /// - `store`: Shared catalog store handed to the worker.
    /// - `debounce_ms`: Quiescent window for the worker.
    ///
    /// Output:
    /// - A ready channel bundle; the worker task is already running.
    #[must_use]
    pub fn new(store: Arc<CatalogStore>, debounce_ms: u64) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
        let (results_tx, results_rx) = mpsc::unbounded_channel::<SearchOutcome>();
        let (open_tx, open_rx) = mpsc::unbounded_channel::<String>();

        spawn_search_worker(store, query_rx, results_tx, debounce_ms);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            query_tx,
            results_rx,
            open_tx,
            open_rx,
        }
    }
}
