//! Configuration file handling and directory resolution.
//!
//! Settings come from `vitrine.toml` in the config directory. A missing file
//! or missing keys fall back to defaults; a malformed file is logged and
//! ignored so startup never blocks on configuration problems.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default quiescent window for the debounced search worker, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default delay between consecutive row reveals, in milliseconds.
pub const DEFAULT_REVEAL_STEP_MS: u64 = 35;

/// User-configurable application settings parsed from `vitrine.toml`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog source: a local JSON file path or an http(s) URL.
    pub catalog: Option<String>,
    /// Quiescent window for the debounced search worker, in milliseconds.
    pub debounce_ms: u64,
    /// Delay between consecutive row reveals, in milliseconds.
    pub reveal_step_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            reveal_step_ms: DEFAULT_REVEAL_STEP_MS,
        }
    }
}

impl Settings {
    /// What: Parse settings from TOML text.
    ///
    /// Inputs:
    /// - `text`: Raw contents of `vitrine.toml`.
    ///
    /// Output:
    /// - `Ok(Settings)` with defaults filled in for absent keys; `Err` with a
    ///   parse diagnostic for malformed input.
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// What: Load settings from the config directory.
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - Parsed settings, or defaults when the file is absent or malformed.
    ///
    /// Details:
    /// - A malformed file logs a warning and falls back to defaults rather
    ///   than failing startup.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => match Self::from_toml(&text) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "malformed settings file; using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

/// Candidate path of `vitrine.toml`, first existing match wins.
fn settings_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join("vitrine").join("vitrine.toml"));
    }
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join("vitrine").join("vitrine.toml"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// What: Return the Vitrine config directory, creating it when possible.
///
/// Inputs: none.
///
/// Output:
/// - `$XDG_CONFIG_HOME/vitrine` or `$HOME/.config/vitrine`; falls back to
///   `./.vitrine` when neither variable is set.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var("HOME")
                .ok()
                .map(|h| Path::new(&h).join(".config"))
        });
    let dir = base.map_or_else(|| PathBuf::from(".vitrine"), |b| b.join("vitrine"));
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Log directory under the config directory, created on demand.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default catalog document path inside the config directory.
#[must_use]
pub fn default_catalog_path() -> PathBuf {
    config_dir().join("catalog.json")
}
