//! UI rendering for Vitrine.
//!
//! One [`ui`] entry point draws the whole frame: search header, category
//! strip, results area, stats footer, and any open modal on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::theme;

pub mod modals;
pub mod results;

/// What: Render one full frame from the current state.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Mutable state; updated with the hit-test rects for this frame.
///
/// Output:
/// - Draws header, filter strip, results, footer, and modal overlay.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    render_search_box(f, app, chunks[0]);
    render_filter_strip(f, app, chunks[1]);
    results::render_results(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);

    modals::render_modal(f, app, area);
}

/// Search input box with a cursor at the end of the text.
fn render_search_box(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let input_line = Line::from(vec![
        Span::styled(" ❯ ", Style::default().fg(th.subtext0)),
        Span::styled(app.input.clone(), Style::default().fg(th.text)),
    ]);
    let boxw = Paragraph::new(input_line).block(
        Block::default()
            .title(Span::styled(
                " Vitrine — product search ",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.lavender)),
    );
    f.render_widget(boxw, area);
    if !app.modal.is_open() {
        // Border column plus the 3-column prompt.
        let x = area.x + 4 + u16::try_from(UnicodeWidthStr::width(app.input.as_str())).unwrap_or(0);
        f.set_cursor_position(Position {
            x: x.min(area.x + area.width.saturating_sub(2)),
            y: area.y + 1,
        });
    }
}

/// One-line category strip with the active filter highlighted.
fn render_filter_strip(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let mut spans: Vec<Span<'static>> = vec![Span::styled(
        " ◂ ",
        Style::default().fg(th.overlay1),
    )];
    let active = app.active_category().to_string();
    for name in std::iter::once("all".to_string()).chain(app.categories.iter().cloned()) {
        let style = if name == active {
            Style::default()
                .fg(th.crust)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        spans.push(Span::styled(format!(" {name} "), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("▸", Style::default().fg(th.overlay1)));
    if app.criteria.min_rating > 0.0 {
        spans.push(Span::styled(
            format!("  ★ ≥ {:.1}", app.criteria.min_rating),
            Style::default().fg(th.yellow),
        ));
    }
    if app.featured_only {
        spans.push(Span::styled(
            "  featured only",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Footer: catalog statistics on the first line, key hints on the second.
fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let stats_line = app.stats.map_or_else(
        || Line::from(Span::styled("  loading catalog…", Style::default().fg(th.subtext1))),
        |s| {
            Line::from(vec![
                Span::styled(
                    format!("  {} products", s.total_products),
                    Style::default().fg(th.subtext0),
                ),
                Span::styled(
                    format!("  ·  {} featured", s.featured_products),
                    Style::default().fg(th.mauve),
                ),
                Span::styled(
                    format!("  ·  avg ★{:.1}", s.average_rating),
                    Style::default().fg(th.yellow),
                ),
                Span::styled(
                    format!("  ·  {} categories", s.total_categories),
                    Style::default().fg(th.sapphire),
                ),
                Span::styled(
                    format!(
                        "  ·  {} deals ({}%)",
                        s.products_with_discount, s.discount_percentage
                    ),
                    Style::default().fg(th.green),
                ),
            ])
        },
    );
    let hints = Line::from(Span::styled(
        "  type to search · ◂ ▸ category · Ctrl+R rating · Ctrl+F featured · Enter review · F1 help · Ctrl+Q quit",
        Style::default().fg(th.overlay2),
    ));
    f.render_widget(Paragraph::new(vec![stats_line, hints]), area);
}
