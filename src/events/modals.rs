//! Key handling while a modal dialog is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};

/// What: Handle a key press while a modal is open.
///
/// Inputs:
/// - `ke`: Pressed key.
/// - `app`: Mutable view state.
///
/// Output:
/// - Mutates the modal (close or scroll); never requests exit.
///
/// Details:
/// - Esc and Enter close every dialog; arrow and page keys scroll the
///   review body and the help overlay.
pub fn handle_modal_key(ke: &KeyEvent, app: &mut AppState) {
    if matches!(app.modal, Modal::Review { .. }) {
        match ke.code {
            KeyCode::Esc | KeyCode::Enter => app.modal.close(),
            KeyCode::Up => app.modal.scroll_review(-1),
            KeyCode::Down => app.modal.scroll_review(1),
            KeyCode::PageUp => app.modal.scroll_review(-10),
            KeyCode::PageDown => app.modal.scroll_review(10),
            _ => {}
        }
        return;
    }
    if matches!(app.modal, Modal::Alert { .. }) {
        if matches!(ke.code, KeyCode::Esc | KeyCode::Enter) {
            app.modal.close();
        }
        return;
    }
    if matches!(app.modal, Modal::Help) {
        match ke.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) => app.modal.close(),
            KeyCode::Up => app.help_scroll = app.help_scroll.saturating_sub(1),
            KeyCode::Down => app.help_scroll = app.help_scroll.saturating_add(1),
            _ => {}
        }
    }
}
