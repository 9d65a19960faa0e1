//! Status bar rendering with keybindings and playback state

use crate::playback::Phase;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `input` is the pending custom-sequence buffer; while it is `Some` the
/// bar switches to input hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    cursor: usize,
    trace_len: usize,
    phase: Phase,
    input: Option<&str>,
) {
    // Split status bar into left and right
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(50),
            ratatui::layout::Constraint::Percentage(50),
        ])
        .split(area);

    // Left side: step badge and status message (or the input buffer)
    let left_spans = if let Some(buffer) = input {
        vec![
            Span::styled(
                " ⌨ SEQUENCE ",
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " | ",
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!(" {buffer}_ "),
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.fg),
            ),
        ]
    } else {
        vec![
            Span::styled(
                format!(" Step {cursor}/{trace_len} "),
                Style::default()
                    .bg(if phase == Phase::Running {
                        DEFAULT_THEME.secondary
                    } else {
                        DEFAULT_THEME.primary
                    })
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " | ",
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!(" {message} "),
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.fg),
            ),
        ]
    };

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = if input.is_some() {
        vec![
            Span::styled(" ↵ ", key_style),
            Span::styled(" commit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" esc ", key_style),
            Span::styled(" cancel ", desc_style),
        ]
    } else {
        vec![
            Span::styled(" ⎵ ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ←/→ ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" a ", key_style),
            Span::styled(" algorithm ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" c ", key_style),
            Span::styled(" sequence ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" e ", key_style),
            Span::styled(" report ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ]
    };

    if input.is_none() {
        match phase {
            Phase::Running => {
                right_spans.push(Span::styled("│", sep_style));
                right_spans.push(Span::styled(
                    " ▶ PLAYING ",
                    Style::default()
                        .bg(DEFAULT_THEME.secondary)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Phase::Finished => {
                right_spans.push(Span::styled("│", sep_style));
                right_spans.push(Span::styled(
                    " END ",
                    Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Phase::Idle => {
                right_spans.push(Span::styled("│", sep_style));
                right_spans.push(Span::styled(
                    " START ",
                    Style::default()
                        .bg(DEFAULT_THEME.success)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Phase::Paused => {}
        }
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
