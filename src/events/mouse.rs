//! Mouse handling: row clicks open reviews, clicks outside an open modal
//! close it, and the wheel scrolls whichever surface is active.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tokio::sync::mpsc;

use crate::state::AppState;

/// Resolve a click inside the results list to a product index.
fn row_at(app: &AppState, x: u16, y: u16) -> Option<usize> {
    let area = app.results_area?;
    // Exclude the border rows/columns of the list block.
    if !area.contains(Position { x, y }) || y == area.y || y + 1 == area.y + area.height {
        return None;
    }
    let row = usize::from(y - area.y - 1);
    let idx = app.list_state.offset() + row;
    (idx < app.results.len()).then_some(idx)
}

/// What: Dispatch a mouse event.
///
/// Inputs:
/// - `m`: Mouse event from the reader thread.
/// - `app`: Mutable view state.
/// - `open_tx`: Channel carrying product ids whose review should open.
///
/// Output:
/// - Always `false` (mouse input never exits).
///
/// Details:
/// - With a modal open, a left click outside the dialog box closes it (the
///   overlay-click contract); clicks inside are ignored.
/// - Without a modal, a left click on a result row selects it and opens its
///   review.
pub fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    open_tx: &mpsc::UnboundedSender<String>,
) -> bool {
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.modal.is_open() {
                let inside = app
                    .modal_area
                    .is_some_and(|r| r.contains(Position { x: m.column, y: m.row }));
                if !inside {
                    app.modal.close();
                }
                return false;
            }
            if let Some(idx) = row_at(app, m.column, m.row) {
                app.selected = idx;
                app.list_state.select(Some(idx));
                if let Some(p) = app.results.get(idx) {
                    let _ = open_tx.send(p.id.clone());
                }
            }
        }
        MouseEventKind::ScrollUp => {
            if app.modal.is_open() {
                app.modal.scroll_review(-1);
            } else {
                app.move_selection(-1);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.modal.is_open() {
                app.modal.scroll_review(1);
            } else {
                app.move_selection(1);
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Product;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_rows(ids: &[&str]) -> AppState {
        let mut app = AppState::default();
        app.set_results(
            ids.iter()
                .map(|id| Product {
                    id: (*id).to_string(),
                    ..Product::default()
                })
                .collect(),
        );
        app.results_area = Some(Rect::new(0, 2, 40, 10));
        app
    }

    #[test]
    /// What: Clicking a result row selects it and opens its review
    ///
    /// - Input: Rows p1..p3; click on the second inner row
    /// - Output: Selection moves to index 1 and "p2" is forwarded
    fn mouse_row_click_opens_review() {
        let (ot, mut or) = mpsc::unbounded_channel();
        let mut app = app_with_rows(&["p1", "p2", "p3"]);
        // Area starts at y=2, border at y=2, first row at y=3.
        handle_mouse_event(click(5, 4), &mut app, &ot);
        assert_eq!(app.selected, 1);
        assert_eq!(or.try_recv().ok().as_deref(), Some("p2"));
    }

    #[test]
    /// What: Clicks on the border or past the list are ignored
    ///
    /// - Input: Click on the top border and far below the rows
    /// - Output: No selection change, nothing forwarded
    fn mouse_click_outside_rows_ignored() {
        let (ot, mut or) = mpsc::unbounded_channel();
        let mut app = app_with_rows(&["p1"]);
        handle_mouse_event(click(5, 2), &mut app, &ot);
        handle_mouse_event(click(5, 8), &mut app, &ot);
        assert_eq!(app.selected, 0);
        assert!(or.try_recv().is_err());
    }

    #[test]
    /// What: Click outside an open modal closes it; inside does not
    ///
    /// - Input: Review modal with a known rect; click inside then outside
    /// - Output: Still open after the inside click, closed after the outside
    ///   one
    fn mouse_overlay_click_closes_modal() {
        let (ot, _or) = mpsc::unbounded_channel();
        let mut app = app_with_rows(&["p1"]);
        app.modal.open_review(Product::default());
        app.modal_area = Some(Rect::new(10, 4, 20, 8));

        handle_mouse_event(click(15, 6), &mut app, &ot);
        assert!(app.modal.is_open());

        handle_mouse_event(click(2, 2), &mut app, &ot);
        assert!(!app.modal.is_open());
    }
}
