//! Array pane rendering as a bar chart
//!
//! This module renders the working array, one bar per element, colored by
//! the element's role in the current step.
//!
//! # Colors
//!
//! - default: element not involved in the current step
//! - compare: element under comparison
//! - write: element being swapped or overwritten
//! - sorted: element locked in its final position
//!
//! Bar heights are scaled against at least 100 so small arrays keep their
//! proportions; negative values are shifted so the shortest bar sits at
//! the baseline while labels show the true value.

use crate::trace::{Highlight, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};
use rustc_hash::FxHashSet;

/// Data needed to render the array pane
pub struct BarsRenderData<'a> {
    pub values: &'a [i64],
    pub highlight: Option<&'a Highlight>,
    pub sorted: &'a FxHashSet<usize>,
}

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Array ({} values) ", data.values.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let floor = data.values.iter().copied().min().unwrap_or(0).min(0);
    let ceiling = data.values.iter().copied().max().unwrap_or(0);
    let scale_max = (ceiling - floor).max(100) as u64;

    let bars: Vec<Bar> = data
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_color(index, &data);
            Bar::default()
                .value((value - floor) as u64)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(DEFAULT_THEME.bg)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    // Fit all bars into the pane, one cell of gap, labels only when wide
    let count = data.values.len().max(1) as u16;
    let bar_width = (area.width.saturating_sub(2) / count)
        .saturating_sub(1)
        .clamp(1, 4);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(scale_max);

    frame.render_widget(chart, area);
}

fn bar_color(index: usize, data: &BarsRenderData) -> Color {
    if let Some(highlight) = data.highlight {
        if highlight.indices.contains(&index) {
            return match highlight.kind {
                StepKind::Compare => DEFAULT_THEME.bar_compare,
                StepKind::Swap | StepKind::Overwrite => DEFAULT_THEME.bar_write,
                StepKind::MarkSorted => DEFAULT_THEME.bar_sorted,
            };
        }
    }
    if data.sorted.contains(&index) {
        DEFAULT_THEME.bar_sorted
    } else {
        DEFAULT_THEME.bar
    }
}
