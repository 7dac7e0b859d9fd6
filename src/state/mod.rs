//! Application state: value types, modal state, and the central container.

pub mod app_state;
pub mod modal;
pub mod types;

// Public re-exports so callers can use `crate::state::*` directly.
pub use app_state::{AppState, RATING_STEPS};
pub use modal::Modal;
pub use types::{
    CatalogStats, FilterCriteria, Product, QueryInput, ResultsView, Review, SearchOutcome,
};
