//! Event handling layer for the TUI.
//!
//! Dispatch order mirrors the interaction contract: an open modal consumes
//! every key first, then global chords (quit, help, filter toggles), then the
//! search pane. Mouse events are delegated to [`mouse`].

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{send_query, send_retry_query};
use crate::state::{AppState, Modal, QueryInput, ResultsView};

mod modals;
mod mouse;
mod search;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Key or mouse event from the reader thread.
/// - `app`: Mutable view state.
/// - `query_tx`: Channel to the debounced search worker.
/// - `open_tx`: Channel carrying product ids whose review should open.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    open_tx: &mpsc::UnboundedSender<String>,
) -> bool {
    if let CEvent::Key(ke) = ev {
        if ke.kind != KeyEventKind::Press {
            return false;
        }

        // Modal handling: an open dialog consumes all keys, freezing the
        // list underneath until it closes.
        if app.modal.is_open() {
            modals::handle_modal_key(&ke, app);
            return false;
        }

        // Global chords, regardless of pane.
        if ke.modifiers.contains(KeyModifiers::CONTROL) {
            match ke.code {
                KeyCode::Char('c' | 'q') => return true,
                KeyCode::Char('f') => {
                    app.featured_only = !app.featured_only;
                    send_query(app, query_tx);
                    return false;
                }
                KeyCode::Char('r') => {
                    app.cycle_min_rating();
                    send_query(app, query_tx);
                    return false;
                }
                _ => return false,
            }
        }
        if ke.code == KeyCode::F(1) {
            app.help_scroll = 0;
            app.modal = Modal::Help;
            return false;
        }
        if matches!(ke.code, KeyCode::Left | KeyCode::Right) {
            let delta = if ke.code == KeyCode::Left { -1 } else { 1 };
            app.cycle_category(delta);
            send_query(app, query_tx);
            return false;
        }

        // Error state: Enter retries the failed query after a catalog
        // reload instead of opening a review.
        if matches!(app.view, ResultsView::Error { .. }) && ke.code == KeyCode::Enter {
            send_retry_query(app, query_tx);
            return false;
        }

        return search::handle_search_key(&ke, app, query_tx, open_tx);
    }

    if let CEvent::Mouse(m) = ev {
        return mouse::handle_mouse_event(m, app, open_tx);
    }
    false
}
