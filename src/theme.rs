//! Theme palette for rendering code.
//!
//! A built-in dark palette is used out of the box; individual colors can be
//! overridden from a `[theme]` table in `vitrine.toml` using `#RRGGBB`
//! values. Unknown keys and unparsable values are logged and skipped, so a
//! bad theme never blocks startup.

use std::sync::OnceLock;

use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels and modals.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Stronger surface color for selection backgrounds.
    pub surface2: Color,
    /// Muted line/border color (primary).
    pub overlay1: Color,
    /// Muted line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for captions and hints.
    pub subtext1: Color,
    /// Accent for interactive highlights and links.
    pub sapphire: Color,
    /// Accent for emphasized headings.
    pub mauve: Color,
    /// Success/positive state color (pros, discounts).
    pub green: Color,
    /// Warning/attention state color (ratings, featured markers).
    pub yellow: Color,
    /// Error/danger state color (cons, failures).
    pub red: Color,
    /// Accent for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// Process-wide theme, resolved once on first access.
static THEME: OnceLock<Theme> = OnceLock::new();

/// What: Parse a `#RRGGBB` color value.
///
/// Inputs:
/// - `s`: Color string, with or without the leading `#`.
///
/// Output:
/// - `Some(Color::Rgb)` on a valid six-digit hex triple; `None` otherwise.
#[must_use]
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Apply `[theme]` overrides from the settings document onto `th`.
fn apply_overrides(th: &mut Theme, table: &toml::value::Table) {
    for (key, value) in table {
        let Some(color) = value.as_str().and_then(parse_hex_color) else {
            tracing::warn!(%key, "ignoring unparsable theme color");
            continue;
        };
        let slot = match key.as_str() {
            "base" => &mut th.base,
            "mantle" => &mut th.mantle,
            "crust" => &mut th.crust,
            "surface1" => &mut th.surface1,
            "surface2" => &mut th.surface2,
            "overlay1" => &mut th.overlay1,
            "overlay2" => &mut th.overlay2,
            "text" => &mut th.text,
            "subtext0" => &mut th.subtext0,
            "subtext1" => &mut th.subtext1,
            "sapphire" => &mut th.sapphire,
            "mauve" => &mut th.mauve,
            "green" => &mut th.green,
            "yellow" => &mut th.yellow,
            "red" => &mut th.red,
            "lavender" => &mut th.lavender,
            _ => {
                tracing::warn!(%key, "unknown theme key");
                continue;
            }
        };
        *slot = color;
    }
}

/// Build the theme from defaults plus any config-file overrides.
fn load_theme() -> Theme {
    let mut th = Theme::default();
    let path = crate::util::config::config_dir().join("vitrine.toml");
    if let Ok(text) = std::fs::read_to_string(&path)
        && let Ok(doc) = text.parse::<toml::Table>()
        && let Some(table) = doc.get("theme").and_then(toml::Value::as_table)
    {
        apply_overrides(&mut th, table);
    }
    th
}

/// Return the application's theme palette, loading overrides on first use.
#[must_use]
pub fn theme() -> Theme {
    *THEME.get_or_init(load_theme)
}
