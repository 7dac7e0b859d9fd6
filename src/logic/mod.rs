//! View-controller logic that is independent of the terminal: query
//! dispatch and search-outcome application.

mod query;
mod results;

pub use query::{send_query, send_retry_query};
pub use results::apply_search_outcome;
