//! Key handling for the search pane: text editing, list navigation, and
//! opening reviews.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::send_query;
use crate::state::{AppState, QueryInput};

/// Mirror the edited input into the criteria and enqueue a query.
fn input_changed(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.last_input_change = std::time::Instant::now();
    app.criteria.search = app.input.clone();
    send_query(app, query_tx);
}

/// What: Handle a key in the search pane.
///
/// Inputs:
/// - `ke`: Pressed key.
/// - `app`: Mutable view state.
/// - `query_tx`: Channel to the debounced search worker.
/// - `open_tx`: Channel carrying product ids whose review should open.
///
/// Output:
/// - Always `false` (no exit from here).
///
/// Details:
/// - Every edit enqueues a query immediately; the worker's quiescent window
///   collapses bursts so only the final keystroke's criteria run.
/// - Enter forwards the highlighted product's id; the runtime resolves it
///   through the store so an unknown id stays a logged no-op.
pub fn handle_search_key(
    ke: &KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    open_tx: &mpsc::UnboundedSender<String>,
) -> bool {
    match ke.code {
        KeyCode::Char(ch) => {
            app.input.push(ch);
            input_changed(app, query_tx);
        }
        KeyCode::Backspace => {
            if app.input.pop().is_some() {
                input_changed(app, query_tx);
            }
        }
        KeyCode::Esc => {
            // Clearing an already-empty input is a no-op, not a re-query.
            if !app.input.is_empty() {
                app.input.clear();
                input_changed(app, query_tx);
            }
        }
        KeyCode::Enter => {
            if let Some(p) = app.results.get(app.selected) {
                let _ = open_tx.send(p.id.clone());
            }
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        _ => {}
    }
    false
}
