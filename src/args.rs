//! Command-line argument definition and one-shot CLI flows.

use clap::Parser;

use crate::catalog::{CatalogSource, CatalogStore};
use crate::util::config::{Settings, default_catalog_path};

/// Vitrine, a fast and friendly TUI for browsing an affiliate product catalog
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "A fast, friendly TUI for browsing an affiliate product catalog", long_about = None)]
pub struct Args {
    /// Catalog source: a local JSON file path or an http(s) URL
    #[arg(long)]
    pub catalog: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Search the catalog from the command line and exit
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print catalog statistics and exit
    #[arg(long)]
    pub stats: bool,
}

/// Effective log level from the flags (`--verbose` wins).
#[must_use]
pub fn determine_log_level(args: &Args) -> &str {
    if args.verbose { "debug" } else { &args.log_level }
}

/// Build the store the one-shot CLI flows query.
fn cli_store(args: &Args) -> CatalogStore {
    let settings = Settings::load();
    let source = args
        .catalog
        .as_deref()
        .or(settings.catalog.as_deref())
        .map_or_else(
            || CatalogSource::File(default_catalog_path()),
            CatalogSource::parse,
        );
    CatalogStore::new(source)
}

/// What: Run any one-shot CLI flow requested by the flags.
///
/// Inputs:
/// - `args`: Parsed command line.
///
/// Output:
/// - `true` when a flow ran (the caller should exit instead of starting the
///   TUI); `false` otherwise.
///
/// Details:
/// - `--search` prints matches line by line; `--stats` prints the aggregate
///   counts. A failed catalog load prints the failure to stderr and still
///   exits cleanly.
pub async fn process_args(args: &Args) -> bool {
    if let Some(query) = args.search.as_deref() {
        let store = cli_store(args);
        if let Err(e) = store.load_result().await {
            eprintln!("vitrine: {e}");
            return true;
        }
        let items = store.search(query).await;
        if items.is_empty() {
            println!("no products match '{query}'");
        }
        for p in items {
            println!(
                "{}  {}  {}  ★{:.1}  [{}]",
                p.id, p.title, p.price, p.rating, p.category
            );
        }
        return true;
    }
    if args.stats {
        let store = cli_store(args);
        if let Err(e) = store.load_result().await {
            eprintln!("vitrine: {e}");
            return true;
        }
        let s = store.statistics().await;
        println!("products:    {}", s.total_products);
        println!("featured:    {}", s.featured_products);
        println!("avg rating:  {:.1}", s.average_rating);
        println!("categories:  {}", s.total_categories);
        println!("discounted:  {} ({}%)", s.products_with_discount, s.discount_percentage);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flag parsing and log-level resolution
    ///
    /// - Input: No flags; --verbose; --log-level trace
    /// - Output: info default, debug under --verbose, trace when set
    fn args_log_level_resolution() {
        let base = Args::parse_from(["vitrine"]);
        assert_eq!(determine_log_level(&base), "info");
        let verbose = Args::parse_from(["vitrine", "--verbose"]);
        assert_eq!(determine_log_level(&verbose), "debug");
        let trace = Args::parse_from(["vitrine", "--log-level", "trace"]);
        assert_eq!(determine_log_level(&trace), "trace");
    }

    #[tokio::test]
    /// What: One-shot search flow runs and signals "handled"
    ///
    /// - Input: --search against a temp catalog
    /// - Output: `process_args` returns true; no flags returns false
    async fn args_one_shot_search_handled() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        std::fs::write(
            file.path(),
            r#"{"products":[{"id":"p1","title":"Desk Lamp","price":"$20","rating":4.0}]}"#,
        )
        .expect("write");
        let path = file.path().display().to_string();

        let search = Args::parse_from(["vitrine", "--catalog", &path, "--search", "lamp"]);
        assert!(process_args(&search).await);

        let stats = Args::parse_from(["vitrine", "--catalog", &path, "--stats"]);
        assert!(process_args(&stats).await);

        let none = Args::parse_from(["vitrine", "--catalog", &path]);
        assert!(!process_args(&none).await);
    }
}
