//! Modal rendering: review detail, alert, and help overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal, Product};
use crate::theme::{Theme, theme};

/// Centered rect of at most `w`×`h` within `area`.
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(2));
    let h = h.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Body lines of the review modal for one product.
fn review_lines(p: &Product, th: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!(" {} ", p.image)),
            Span::styled(
                p.title.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!(" [{}]", p.category), Style::default().fg(th.sapphire)),
            Span::styled(format!("  {}", p.price), Style::default().fg(th.green)),
            Span::styled(
                format!("  {} {:.1}", crate::util::stars(p.rating), p.rating),
                Style::default().fg(th.yellow),
            ),
        ]),
        Line::from(""),
    ];
    if !p.review.summary.is_empty() {
        lines.push(Line::from(Span::styled(
            p.review.summary.clone(),
            Style::default().fg(th.text),
        )));
        lines.push(Line::from(""));
    }
    if !p.review.pros.is_empty() {
        lines.push(Line::from(Span::styled(
            "Pros",
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        )));
        for pro in &p.review.pros {
            lines.push(Line::from(Span::styled(
                format!("  + {pro}"),
                Style::default().fg(th.subtext1),
            )));
        }
        lines.push(Line::from(""));
    }
    if !p.review.cons.is_empty() {
        lines.push(Line::from(Span::styled(
            "Cons",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )));
        for con in &p.review.cons {
            lines.push(Line::from(Span::styled(
                format!("  - {con}"),
                Style::default().fg(th.subtext1),
            )));
        }
        lines.push(Line::from(""));
    }
    if !p.review.verdict.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(
                "Verdict: ",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(p.review.verdict.clone(), Style::default().fg(th.text)),
        ]));
        lines.push(Line::from(""));
    }
    if !p.affiliate_link.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("→ {}", p.affiliate_link),
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Esc/Enter to close · ↑↓ to scroll",
        Style::default().fg(th.overlay2),
    )));
    lines
}

/// What: Render the open modal, if any, on top of the frame.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Mutable state; `modal_area` is recorded for the overlay-click
///   hit test, or cleared when nothing is open.
/// - `area`: Full screen area used for centering.
///
/// Output:
/// - Draws the review, alert, or help dialog over a cleared region.
pub fn render_modal(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let modal = app.modal.clone();
    match &modal {
        Modal::None => {
            app.modal_area = None;
        }
        Modal::Review { product, scroll } => {
            let rect = centered(area, 78, 24);
            app.modal_area = Some(rect);
            f.render_widget(Clear, rect);
            let body = Paragraph::new(review_lines(product, &th))
                .style(Style::default().fg(th.text).bg(th.mantle))
                .wrap(Wrap { trim: false })
                .scroll((*scroll, 0))
                .block(
                    Block::default()
                        .title(Span::styled(
                            " Review ",
                            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.mauve))
                        .style(Style::default().bg(th.mantle)),
                );
            f.render_widget(body, rect);
        }
        Modal::Alert { message } => {
            let rect = centered(area, 60, 7);
            app.modal_area = Some(rect);
            f.render_widget(Clear, rect);
            let lines = vec![
                Line::from(Span::styled(message.clone(), Style::default().fg(th.text))),
                Line::from(""),
                Line::from(Span::styled(
                    "Esc/Enter to close",
                    Style::default().fg(th.subtext1),
                )),
            ];
            let body = Paragraph::new(lines)
                .style(Style::default().fg(th.text).bg(th.mantle))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(Span::styled(
                            " Notice ",
                            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.red))
                        .style(Style::default().bg(th.mantle)),
                );
            f.render_widget(body, rect);
        }
        Modal::Help => {
            let rect = centered(area, 64, 18);
            app.modal_area = Some(rect);
            f.render_widget(Clear, rect);
            let keys: [(&str, &str); 10] = [
                ("type / Backspace", "edit the search text"),
                ("Esc", "clear the search (or close a dialog)"),
                ("◂ ▸", "cycle the category filter"),
                ("Ctrl+R", "cycle the minimum-rating filter"),
                ("Ctrl+F", "toggle featured-only"),
                ("↑ ↓ PgUp PgDn", "move the selection"),
                ("Enter", "open the review (retry when a query failed)"),
                ("mouse click", "open a row's review / close a dialog"),
                ("F1", "this help"),
                ("Ctrl+Q / Ctrl+C", "quit"),
            ];
            let mut lines = Vec::with_capacity(keys.len() + 2);
            for (chord, what) in keys {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {chord:<16}"),
                        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(what.to_string(), Style::default().fg(th.text)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " Esc/Enter to close",
                Style::default().fg(th.subtext1),
            )));
            let body = Paragraph::new(lines)
                .style(Style::default().fg(th.text).bg(th.mantle))
                .scroll((app.help_scroll, 0))
                .block(
                    Block::default()
                        .title(Span::styled(
                            " Help ",
                            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.lavender))
                        .style(Style::default().bg(th.mantle)),
                );
            f.render_widget(body, rect);
        }
    }
}
