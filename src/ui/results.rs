//! Results area rendering: the product list and the Loading/Empty/Error
//! panels.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::state::{AppState, Product, ResultsView};
use crate::theme::{Theme, theme};
use crate::util::{stars, truncate_ellipsis};

/// What: Build the span segments for one product row.
///
/// Inputs:
/// - `p`: Product to render.
/// - `width`: Available columns, used to budget the description.
/// - `th`: Theme palette.
///
/// Output:
/// - Spans for image token, title, prices, discount badge, rating, category
///   tag, and a featured marker.
fn product_segments(p: &Product, width: u16, th: &Theme) -> Vec<Span<'static>> {
    let mut segs = vec![
        Span::raw(format!(" {} ", p.image)),
        Span::styled(
            p.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", p.price), Style::default().fg(th.green)),
    ];
    if p.has_discount() {
        if !p.original_price.is_empty() {
            segs.push(Span::styled(
                format!("  {}", p.original_price),
                Style::default()
                    .fg(th.overlay1)
                    .add_modifier(Modifier::CROSSED_OUT),
            ));
        }
        segs.push(Span::styled(
            format!("  -{}", p.discount.trim_start_matches('-')),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ));
    }
    segs.push(Span::styled(
        format!("  {} {:.1}", stars(p.rating), p.rating),
        Style::default().fg(th.yellow),
    ));
    segs.push(Span::styled(
        format!("  [{}]", p.category),
        Style::default().fg(th.sapphire),
    ));
    if p.featured {
        segs.push(Span::styled(
            "  ◆ featured",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ));
    }
    if !p.short_description.is_empty() && width > 90 {
        segs.push(Span::raw("  — "));
        segs.push(Span::styled(
            truncate_ellipsis(&p.short_description, usize::from(width.saturating_sub(80))),
            Style::default().fg(th.overlay2),
        ));
    }
    segs
}

/// Centered single-message panel used by the Loading and Empty states.
fn render_message_panel(f: &mut Frame, area: Rect, text: &str, accent: ratatui::style::Color) {
    let th = theme();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
    ];
    let panel = Paragraph::new(lines)
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay1)),
        );
    f.render_widget(panel, area);
}

/// What: Render the results area for the current display state.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Mutable state; `results_area` is recorded for mouse hit tests.
/// - `area`: Assigned screen region.
///
/// Output:
/// - Exactly one of the Loading/Showing/Empty/Error presentations.
///
/// Details:
/// - Rows beyond the reveal counter render as dim placeholders until the
///   staggered reveal catches up; each set reveals once.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    app.results_area = Some(area);

    match &app.view {
        ResultsView::Loading => {
            render_message_panel(f, area, "Loading products…", th.subtext1);
        }
        ResultsView::Empty => {
            render_message_panel(f, area, "No products match your filters", th.yellow);
        }
        ResultsView::Error { message } => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Could not query the catalog",
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(th.text),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter to retry",
                    Style::default().fg(th.subtext1),
                )),
            ];
            let panel = Paragraph::new(lines)
                .centered()
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.red)),
                );
            f.render_widget(panel, area);
        }
        ResultsView::Showing => {
            let items: Vec<ListItem> = app
                .results
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    if i < app.revealed_rows {
                        ListItem::new(Line::from(product_segments(p, area.width, &th)))
                    } else {
                        ListItem::new(Line::from(Span::styled(
                            " ···",
                            Style::default().fg(th.surface1),
                        )))
                    }
                })
                .collect();
            let count = app.results.len();
            let list = List::new(items)
                .style(Style::default().fg(th.text).bg(th.base))
                .highlight_style(
                    Style::default()
                        .bg(th.surface2)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ")
                .block(
                    Block::default()
                        .title(Span::styled(
                            format!(" Products ({count}) "),
                            Style::default().fg(th.sapphire),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(th.overlay1)),
                );
            f.render_stateful_widget(list, area, &mut app.list_state);
        }
    }
}
