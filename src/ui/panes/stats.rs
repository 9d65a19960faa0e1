//! Statistics pane rendering with counters and complexity figures
//!
//! This module renders the live operation counters for the current
//! playback position next to the theoretical complexity of the selected
//! algorithm and an actual-vs-theoretical assessment.
//!
//! # Layout
//!
//! - Counter rows (comparisons, swaps or writes, totals, merge depth)
//! - Playback progress as steps taken over trace length
//! - Theoretical complexity block for the current array size
//! - Actual performance block with the efficiency ratio

use crate::trace::{Algorithm, StepStats};
use crate::ui::theme::DEFAULT_THEME;
use crate::views::complexity::{actual, theoretical, total_operations};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the statistics pane
#[derive(Clone, Copy)]
pub struct StatsRenderData {
    pub algorithm: Algorithm,
    pub cursor: usize,
    pub trace_len: usize,
    pub array_len: usize,
    pub stats: StepStats,
}

/// Render the statistics pane
pub fn render_stats_pane(
    frame: &mut Frame,
    area: Rect,
    data: StatsRenderData,
    is_focused: bool,
    scroll: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = Vec::new();

    lines.push(counter_line("Comparisons", data.stats.comparisons));
    match data.algorithm {
        Algorithm::Merge => {
            lines.push(counter_line("Array Writes", data.stats.writes));
        }
        Algorithm::Bubble | Algorithm::Insertion => {
            lines.push(counter_line("Swaps", data.stats.swaps));
        }
    }
    lines.push(counter_line(
        "Total Operations",
        total_operations(data.stats),
    ));
    if data.algorithm.is_recursive() {
        lines.push(counter_line(
            "Max Recursion Depth",
            data.stats.max_recursion_depth,
        ));
    }

    let percent = if data.trace_len == 0 {
        0
    } else {
        (data.cursor as f64 / data.trace_len as f64 * 100.0).round() as usize
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Progress            ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{}/{} ({percent}%)", data.cursor, data.trace_len),
            Style::default().fg(DEFAULT_THEME.number),
        ),
    ]));

    let profile = theoretical(data.algorithm, data.array_len);
    lines.push(Line::from(""));
    lines.push(section_line("Theoretical Complexity"));
    lines.push(figure_line("Average", &profile.average));
    lines.push(figure_line("Best", &profile.best));
    lines.push(figure_line("Worst", &profile.worst));
    lines.push(figure_line("Space", &profile.space));

    let performance = actual(data.algorithm, data.array_len, data.stats);
    lines.push(Line::from(""));
    lines.push(section_line("Actual Performance"));
    lines.push(figure_line("Operations", &performance.operations.to_string()));
    lines.push(figure_line(
        "Estimate",
        &performance.theoretical.to_string(),
    ));
    lines.push(figure_line("Ratio", &format!("{:.2}", performance.ratio)));

    let assessment_color = match performance.assessment {
        "Better than expected" => DEFAULT_THEME.success,
        "As expected" => DEFAULT_THEME.primary,
        _ => DEFAULT_THEME.error,
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!(" {} ", performance.assessment),
            Style::default()
                .bg(assessment_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    *scroll = (*scroll).min(lines.len().saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn counter_line(label: &str, value: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<20}"),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn section_line(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.type_name)
            .add_modifier(Modifier::BOLD),
    ))
}

fn figure_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {label:<9} "),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ])
}
