//! Pseudocode pane rendering with the active line highlighted
//!
//! This module renders the fixed pseudocode listing for the current
//! algorithm, marks the line the current step maps onto, and prints the
//! step annotation underneath.
//!
//! # Rendering
//!
//! - Numbered listing, one line per pseudocode line
//! - Active line gets a background highlight and a bold line number
//! - Inline `value=V` tags are appended to the active line for writes
//! - Annotation sentence at the bottom of the pane

use crate::trace::{Algorithm, Step};
use crate::ui::theme::DEFAULT_THEME;
use crate::views::pseudocode::{line_focus, listing};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the pseudocode pane
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    step: Option<&Step>,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Pseudocode ({}) ", algorithm.name()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let focus = line_focus(algorithm, step);

    let mut lines: Vec<Line> = listing(algorithm)
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let is_current = idx == focus.line;
            let (num_style, content_style) = if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .fg(DEFAULT_THEME.fg),
                )
            } else {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.fg),
                )
            };

            let mut spans = vec![
                Span::styled(format!("{:2} ", idx + 1), num_style),
                Span::styled((*text).to_string(), content_style),
            ];
            if is_current && !focus.inline.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", focus.inline),
                    Style::default()
                        .fg(DEFAULT_THEME.highlight_value)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            focus.annotation.clone(),
            Style::default().fg(DEFAULT_THEME.annotation),
        ),
    ]));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
