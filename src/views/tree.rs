//! Algorithm state tree
//!
//! A small fixed-shape tree summarizing the run: a root carrying the
//! cumulative counters, one child describing the current action, and one
//! child with a progress percentage. Rendering is left to the caller.

use crate::trace::{Algorithm, Step, StepStats};

/// One node of the state tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: impl Into<String>) -> Self {
        TreeNode {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Build the state tree for the current step, or `None` before playback
/// has produced one.
///
/// The root's counter attributes depend on the algorithm: bubble sort
/// reports swaps, insertion sort reports writes, merge sort reports
/// writes and recursion depth.
pub fn state_tree(algorithm: Algorithm, cursor: usize, step: Option<&Step>) -> Option<TreeNode> {
    let step = step?;
    let stats = step.stats();

    let mut root = TreeNode::new(format!("{} State", algorithm.name()));
    root.attributes.push(("step", format!("Step {cursor}")));
    root.attributes
        .push(("comparisons", format!("Comparisons: {}", stats.comparisons)));
    match algorithm {
        Algorithm::Bubble => {
            root.attributes
                .push(("swaps", format!("Swaps: {}", stats.swaps)));
        }
        Algorithm::Insertion => {
            root.attributes
                .push(("writes", format!("Writes: {}", stats.writes)));
        }
        Algorithm::Merge => {
            root.attributes
                .push(("writes", format!("Writes: {}", stats.writes)));
            root.attributes
                .push(("depth", format!("Depth: {}", stats.recursion_depth)));
        }
    }

    let details = match *step {
        Step::Compare { left, right, .. } => format!("Comparing elements at [{left} & {right}]"),
        Step::Swap { left, right, .. } => format!("Swapping elements at [{left} ↔ {right}]"),
        Step::Overwrite { index, value, .. } => format!("Writing {value} to index {index}"),
        Step::MarkSorted { index, .. } => format!("Marking index {index} as sorted"),
    };
    let mut action = TreeNode::new("Current Action");
    action
        .attributes
        .push(("type", step.kind().label().to_string()));
    action.attributes.push(("details", details));
    root.children.push(action);

    let mut progress = TreeNode::new("Progress");
    progress
        .attributes
        .push(("percentage", format!("{}% Complete", progress_percent(cursor, stats))));
    root.children.push(progress);

    Some(root)
}

/// Ratio of cursor to the dominant counter, clamped to 100. Not a
/// fraction of the trace length; the stats pane carries that ratio.
fn progress_percent(cursor: usize, stats: StepStats) -> usize {
    let denominator = if stats.writes != 0 {
        stats.writes
    } else if stats.comparisons != 0 {
        stats.comparisons
    } else {
        1
    };
    let percent = (cursor as f64 / denominator as f64 * 100.0).round() as usize;
    percent.min(100)
}
