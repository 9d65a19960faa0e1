//! Flat-text analysis report
//!
//! Assembles the other adapters into a plain-text block the TUI can show
//! or export. Layout is a fixed template; every section degrades to
//! `N/A` (or zero counters) before playback has produced a step.

use crate::trace::{Algorithm, Step};
use crate::views::explain::explain;
use crate::views::pseudocode::line_focus;
use crate::views::tree::{state_tree, TreeNode};

/// One-paragraph description of an algorithm
pub fn algorithm_explanation(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bubble => {
            "Bubble Sort repeatedly steps through the list, compares adjacent \
             elements and swaps them if they are in the wrong order. It is \
             simple but inefficient for large datasets."
        }
        Algorithm::Insertion => {
            "Insertion Sort builds the sorted array one item at a time, \
             inserting each new element into its correct position. It is \
             efficient for small or nearly sorted datasets."
        }
        Algorithm::Merge => {
            "Merge Sort is a divide-and-conquer algorithm that splits the \
             array into halves, sorts each half, and merges them. It is \
             efficient and stable, with O(n log n) complexity."
        }
    }
}

/// File name the report is exported under
pub fn report_filename(algorithm: Algorithm) -> String {
    format!("{}_analysis_report.txt", algorithm.name().replace(' ', "_"))
}

/// Assemble the full report text for the current playback position.
pub fn render_report(algorithm: Algorithm, cursor: usize, step: Option<&Step>) -> String {
    let action = step
        .map(|step| step.kind().label().to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let line = step
        .map(|step| (line_focus(algorithm, Some(step)).line + 1).to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let stats = step.map(|step| step.stats()).unwrap_or_default();
    let counters = match algorithm {
        Algorithm::Bubble => format!(
            "comparisons: {}\nswaps: {}",
            stats.comparisons, stats.swaps
        ),
        Algorithm::Insertion => format!(
            "comparisons: {}\nwrites: {}",
            stats.comparisons, stats.writes
        ),
        Algorithm::Merge => format!(
            "comparisons: {}\nwrites: {}\nrecursion depth: {}\nmax recursion depth: {}",
            stats.comparisons, stats.writes, stats.recursion_depth, stats.max_recursion_depth
        ),
    };

    let tree = match state_tree(algorithm, cursor, step) {
        Some(root) => render_tree_text(&root),
        None => "N/A".to_string(),
    };
    let details = step
        .map(|step| format!("{step:#?}"))
        .unwrap_or_else(|| "N/A".to_string());

    let explanation = explain(algorithm, step);
    let extra = if explanation.detailed.is_empty() {
        explanation.simple
    } else {
        format!("{}\n{}", explanation.simple, explanation.detailed)
    };

    format!(
        "\nAlgorithm Analysis Report\n\
         ========================\n\
         \n\
         Algorithm: {name}\n\
         \n\
         Current Step: {cursor}\n\
         Current Action: {action}\n\
         Pseudocode Line: {line}\n\
         \n\
         Algorithm Explanation:\n\
         {paragraph}\n\
         \n\
         Complexity Stats:\n\
         {counters}\n\
         \n\
         Tree Graph Data:\n\
         {tree}\n\
         \n\
         Step Details:\n\
         {details}\n\
         \n\
         Additional Explanation:\n\
         {extra}\n",
        name = algorithm.name(),
        paragraph = algorithm_explanation(algorithm),
    )
}

/// Flatten a state tree into indented lines, attribute values joined
/// with pipes. The values carry their own labels.
fn render_tree_text(root: &TreeNode) -> String {
    let mut lines = Vec::new();
    push_tree_lines(root, 0, &mut lines);
    lines.join("\n")
}

fn push_tree_lines(node: &TreeNode, depth: usize, lines: &mut Vec<String>) {
    let values: Vec<&str> = node
        .attributes
        .iter()
        .map(|(_, value)| value.as_str())
        .collect();
    let indent = "  ".repeat(depth);
    if values.is_empty() {
        lines.push(format!("{indent}{}", node.name));
    } else {
        lines.push(format!("{indent}{} ({})", node.name, values.join(" | ")));
    }
    for child in &node.children {
        push_tree_lines(child, depth + 1, lines);
    }
}
