//! Explanation pane rendering, with a state-tree alternate view
//!
//! Shows the natural-language description of the current step, either as
//! the one-line summary alone or together with the detailed paragraph.
//! The pane can be toggled to render the algorithm state tree instead.

use crate::trace::{Algorithm, Step};
use crate::ui::theme::DEFAULT_THEME;
use crate::views::explain::explain;
use crate::views::tree::{state_tree, TreeNode};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the explanation pane
pub struct ExplainRenderData<'a> {
    pub algorithm: Algorithm,
    pub cursor: usize,
    pub step: Option<&'a Step>,
    pub show_tree: bool,
    pub show_detail: bool,
}

/// Render the explanation pane (or its state-tree alternate)
pub fn render_explain_pane(
    frame: &mut Frame,
    area: Rect,
    data: ExplainRenderData,
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

    let title = if data.show_tree {
        " State Tree "
    } else {
        " Explanation "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = if data.show_tree {
        tree_lines(data.algorithm, data.cursor, data.step)
    } else {
        explanation_lines(data.algorithm, data.step, data.show_detail)
    };

    *scroll = (*scroll).min(lines.len().saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn explanation_lines(
    algorithm: Algorithm,
    step: Option<&Step>,
    show_detail: bool,
) -> Vec<Line<'static>> {
    let explanation = explain(algorithm, step);

    let mut lines = vec![Line::from(Span::styled(
        explanation.simple,
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    ))];

    if show_detail && !explanation.detailed.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            explanation.detailed,
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    } else if !explanation.detailed.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" d ", Style::default().bg(DEFAULT_THEME.comment).fg(DEFAULT_THEME.bg)),
            Span::styled(
                " explain this step in detail",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }

    lines
}

fn tree_lines(algorithm: Algorithm, cursor: usize, step: Option<&Step>) -> Vec<Line<'static>> {
    let root = match state_tree(algorithm, cursor, step) {
        Some(root) => root,
        None => {
            return vec![Line::from(Span::styled(
                "Waiting for algorithm steps...",
                Style::default().fg(DEFAULT_THEME.comment),
            ))]
        }
    };

    let mut lines = Vec::new();
    push_node_lines(&root, 0, &mut lines);
    lines
}

fn push_node_lines(node: &TreeNode, depth: usize, lines: &mut Vec<Line<'static>>) {
    let indent = "  ".repeat(depth);
    lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            node.name.clone(),
            Style::default()
                .fg(DEFAULT_THEME.type_name)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if !node.attributes.is_empty() {
        let mut spans = vec![Span::raw(format!("{indent}    "))];
        for (i, (_, value)) in node.attributes.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    " │ ",
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            spans.push(Span::styled(
                value.clone(),
                Style::default().fg(DEFAULT_THEME.fg),
            ));
        }
        lines.push(Line::from(spans));
    }

    for child in &node.children {
        push_node_lines(child, depth + 1, lines);
    }
}
