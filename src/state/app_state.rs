//! Central `AppState` container for the view layer.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::state::modal::Modal;
use crate::state::types::{CatalogStats, FilterCriteria, Product, ResultsView};

/// Minimum-rating thresholds cycled by the rating filter key, in order.
pub const RATING_STEPS: [f64; 4] = [0.0, 3.0, 4.0, 4.5];

/// View state shared by the event, worker, and UI layers.
///
/// Mutated only from the runtime's event loop; background workers communicate
/// through channels, so no field needs synchronization. All of it is
/// discarded at session end.
#[derive(Debug)]
pub struct AppState {
    /// Current search input text.
    pub input: String,
    /// Filter criteria mirrored from the input and filter keys.
    pub criteria: FilterCriteria,
    /// Restrict the list to featured products.
    pub featured_only: bool,
    /// Products currently rendered, in catalog order.
    pub results: Vec<Product>,
    /// Index into `results` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,
    /// Mutually exclusive display state of the results area.
    pub view: ResultsView,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Sorted unique category names from the catalog (without `"all"`).
    pub categories: Vec<String>,
    /// Index into the category cycle; `0` selects `"all"`.
    pub category_index: usize,
    /// Aggregate catalog statistics for the footer, once loaded.
    pub stats: Option<CatalogStats>,
    /// Next query identifier to allocate.
    pub next_query_id: u64,
    /// Identifier of the latest query whose outcome may be applied.
    pub latest_query_id: u64,
    /// Timestamp of the last input edit.
    pub last_input_change: Instant,
    /// Rows already revealed by the staggered reveal animation.
    pub revealed_rows: usize,
    /// Screen area of the results list from the last frame (mouse hit tests).
    pub results_area: Option<Rect>,
    /// Screen area of the open modal from the last frame (mouse hit tests).
    pub modal_area: Option<Rect>,
    /// Scroll offset of the help overlay.
    pub help_scroll: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            criteria: FilterCriteria::default(),
            featured_only: false,
            results: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            view: ResultsView::Loading,
            modal: Modal::None,
            categories: Vec::new(),
            category_index: 0,
            stats: None,
            next_query_id: 1,
            latest_query_id: 0,
            last_input_change: Instant::now(),
            revealed_rows: 0,
            results_area: None,
            modal_area: None,
            help_scroll: 0,
        }
    }
}

impl AppState {
    /// Name of the currently active category filter (`"all"` when index 0).
    #[must_use]
    pub fn active_category(&self) -> &str {
        if self.category_index == 0 {
            "all"
        } else {
            self.categories
                .get(self.category_index - 1)
                .map_or("all", String::as_str)
        }
    }

    /// What: Cycle the category filter by `delta` positions.
    ///
    /// Inputs:
    /// - `delta`: `-1` or `1` from the Left/Right keys.
    ///
    /// Output:
    /// - Updates `category_index` (wrapping over `"all"` plus every known
    ///   category) and mirrors the result into `criteria.category`.
    ///
    /// Details:
    /// - Exactly one category is active at a time by construction.
    pub fn cycle_category(&mut self, delta: i32) {
        let slots = i64::try_from(self.categories.len() + 1).unwrap_or(1);
        let cur = i64::try_from(self.category_index).unwrap_or(0);
        let next = (cur + i64::from(delta)).rem_euclid(slots);
        self.category_index = usize::try_from(next).unwrap_or(0);
        self.criteria.category = self.active_category().to_string();
    }

    /// What: Advance the minimum-rating filter to the next threshold.
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - Steps `criteria.min_rating` through [`RATING_STEPS`], wrapping back
    ///   to no constraint after the strictest step.
    pub fn cycle_min_rating(&mut self) {
        let pos = RATING_STEPS
            .iter()
            .position(|r| (*r - self.criteria.min_rating).abs() < f64::EPSILON)
            .unwrap_or(0);
        self.criteria.min_rating = RATING_STEPS[(pos + 1) % RATING_STEPS.len()];
    }

    /// What: Replace the result list and derive the display state.
    ///
    /// Inputs:
    /// - `products`: Fresh query results in catalog order.
    ///
    /// Output:
    /// - Sets `view` to `Showing` or `Empty`, restarts the reveal animation,
    ///   and preserves the selection by product id when possible.
    pub fn set_results(&mut self, products: Vec<Product>) {
        let prev_id = self.results.get(self.selected).map(|p| p.id.clone());
        self.results = products;
        self.revealed_rows = 0;
        if self.results.is_empty() {
            self.view = ResultsView::Empty;
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        self.view = ResultsView::Showing;
        let pos = prev_id
            .and_then(|id| self.results.iter().position(|p| p.id == id))
            .unwrap_or(0);
        self.selected = pos.min(self.results.len() - 1);
        self.list_state.select(Some(self.selected));
    }

    /// Move the highlighted row by `delta`, clamping to the list bounds.
    pub fn move_selection(&mut self, delta: i64) {
        if self.results.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        let len = i64::try_from(self.results.len()).unwrap_or(1);
        let cur = i64::try_from(self.selected).unwrap_or(0);
        let next = (cur + delta).clamp(0, len - 1);
        self.selected = usize::try_from(next).unwrap_or(0);
        self.list_state.select(Some(self.selected));
    }

    /// Whether rows are still waiting on the reveal animation.
    #[must_use]
    pub fn reveal_pending(&self) -> bool {
        self.revealed_rows < self.results.len()
    }

    /// What: Reveal the next row of the staggered animation.
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - `true` when a row was revealed; `false` once the set is complete.
    ///
    /// Details:
    /// - One-shot per result set: the counter only resets when
    ///   [`Self::set_results`] installs a new list.
    pub fn advance_reveal(&mut self) -> bool {
        if self.reveal_pending() {
            self.revealed_rows += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            title: id.to_uppercase(),
            ..Product::default()
        }
    }

    #[test]
    /// What: Session starts with identity filters and a closed modal
    ///
    /// - Input: `AppState::default()`
    /// - Output: category "all", empty search, zero rating threshold,
    ///   modal closed, Loading view
    fn state_defaults_match_session_start() {
        let app = AppState::default();
        assert_eq!(app.criteria.category, "all");
        assert!(app.criteria.search.is_empty());
        assert!(app.criteria.min_rating.abs() < f64::EPSILON);
        assert!(!app.modal.is_open());
        assert_eq!(app.view, ResultsView::Loading);
    }

    #[test]
    /// What: Category cycling wraps and keeps exactly one active filter
    ///
    /// - Input: Two known categories; cycle right three times and left once
    /// - Output: all → audio → video → all → video, criteria mirrored
    fn state_cycle_category_wraps() {
        let mut app = AppState {
            categories: vec!["audio".into(), "video".into()],
            ..AppState::default()
        };
        app.cycle_category(1);
        assert_eq!(app.active_category(), "audio");
        assert_eq!(app.criteria.category, "audio");
        app.cycle_category(1);
        assert_eq!(app.active_category(), "video");
        app.cycle_category(1);
        assert_eq!(app.active_category(), "all");
        app.cycle_category(-1);
        assert_eq!(app.active_category(), "video");
        assert_eq!(app.criteria.category, "video");
    }

    #[test]
    /// What: Rating filter steps through thresholds and wraps to zero
    ///
    /// - Input: Four consecutive cycles from the default
    /// - Output: 3.0, 4.0, 4.5, then back to 0.0
    fn state_cycle_min_rating_steps() {
        let mut app = AppState::default();
        app.cycle_min_rating();
        assert!((app.criteria.min_rating - 3.0).abs() < f64::EPSILON);
        app.cycle_min_rating();
        assert!((app.criteria.min_rating - 4.0).abs() < f64::EPSILON);
        app.cycle_min_rating();
        assert!((app.criteria.min_rating - 4.5).abs() < f64::EPSILON);
        app.cycle_min_rating();
        assert!(app.criteria.min_rating.abs() < f64::EPSILON);
    }

    #[test]
    /// What: Result replacement derives view state and preserves selection
    ///
    /// - Input: Select "b", then install a narrower list still holding "b";
    ///   then an empty list
    /// - Output: Selection follows "b"; empty list yields Empty view with no
    ///   selection
    fn state_set_results_preserves_selection_by_id() {
        let mut app = AppState::default();
        app.set_results(vec![product("a"), product("b"), product("c")]);
        app.move_selection(1);
        assert_eq!(app.results[app.selected].id, "b");

        app.set_results(vec![product("b"), product("c")]);
        assert_eq!(app.view, ResultsView::Showing);
        assert_eq!(app.results[app.selected].id, "b");

        app.set_results(Vec::new());
        assert_eq!(app.view, ResultsView::Empty);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    /// What: Reveal animation advances once per tick and is one-shot
    ///
    /// - Input: Two-row result set; advance three times
    /// - Output: Two advances succeed, the third reports completion; a new
    ///   result set restarts the counter
    fn state_reveal_one_shot_per_result_set() {
        let mut app = AppState::default();
        app.set_results(vec![product("a"), product("b")]);
        assert!(app.reveal_pending());
        assert!(app.advance_reveal());
        assert!(app.advance_reveal());
        assert!(!app.advance_reveal());
        assert!(!app.reveal_pending());

        app.set_results(vec![product("c")]);
        assert_eq!(app.revealed_rows, 0);
        assert!(app.reveal_pending());
    }

    #[test]
    /// What: Selection movement clamps at both list ends
    ///
    /// - Input: Three-row list; large negative and positive deltas
    /// - Output: Selection pinned to first and last row respectively
    fn state_move_selection_clamps() {
        let mut app = AppState::default();
        app.set_results(vec![product("a"), product("b"), product("c")]);
        app.move_selection(-10);
        assert_eq!(app.selected, 0);
        app.move_selection(10);
        assert_eq!(app.selected, 2);
    }
}
