//! Application runtime: terminal lifecycle, channels, workers, and the main
//! event loop.

/// Runtime event loop, channels, and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
