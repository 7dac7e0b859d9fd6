//! Main runtime: wire state, channels, and workers together and drive the
//! event loop.

use std::sync::Arc;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::catalog::{CatalogSource, CatalogStore};
use crate::logic::send_query;
use crate::state::AppState;
use crate::ui::ui;
use crate::util::config::{Settings, default_catalog_path};

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod handlers;
mod workers;

use channels::Channels;
use workers::spawn_event_thread;

/// Boxed error alias shared across the runtime.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Pick the catalog source: CLI override, then config file, then the default
/// path in the config directory.
fn resolve_source(catalog_override: Option<String>, settings: &Settings) -> CatalogSource {
    catalog_override
        .as_deref()
        .or(settings.catalog.as_deref())
        .map_or_else(
            || CatalogSource::File(default_catalog_path()),
            CatalogSource::parse,
        )
}

/// What: Run the Vitrine TUI end-to-end.
///
/// Inputs:
/// - `catalog_override`: CLI `--catalog` value, when given.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal failures.
///
/// Details:
/// - Loads settings, constructs the injected `CatalogStore`, spawns the
///   debounced search worker and the event reader thread, fires the initial
///   query, then drives the draw/select loop until an exit chord.
/// - `VITRINE_TEST_HEADLESS=1` skips terminal setup and the reader thread so
///   the loop can run without a TTY.
pub async fn run(catalog_override: Option<String>) -> Result<()> {
    let headless = std::env::var("VITRINE_TEST_HEADLESS").ok().as_deref() == Some("1");
    let settings = Settings::load();
    let source = resolve_source(catalog_override, &settings);
    tracing::info!(source = %source.describe(), "starting session");

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    let store = Arc::new(CatalogStore::new(source));
    let mut channels = Channels::new(Arc::clone(&store), settings.debounce_ms);

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );

    // Initial query populates the list (and triggers the one catalog load).
    send_query(&mut app, &channels.query_tx);

    let mut reveal = tokio::time::interval(tokio::time::Duration::from_millis(
        settings.reveal_step_ms.max(1),
    ));

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &channels.query_tx, &channels.open_tx) {
                    break;
                }
            }
            Some(outcome) = channels.results_rx.recv() => {
                if handlers::handle_search_outcome(&mut app, outcome) {
                    handlers::refresh_catalog_meta(&mut app, &store).await;
                }
            }
            Some(id) = channels.open_rx.recv() => {
                let found = store.get_by_id(&id).await;
                handlers::handle_open_review(&mut app, found, &id);
            }
            _ = reveal.tick(), if app.reveal_pending() => {
                let _ = app.advance_reveal();
            }
            else => {}
        }
    }

    // Signal the reader thread before tearing the terminal down.
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
