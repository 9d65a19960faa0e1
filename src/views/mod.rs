//! View adapters from playback state to presentable data
//!
//! Everything the panes display is derived here from the algorithm, the
//! cursor, and at most one step, so rendering stays a pure function of
//! playback state:
//!
//! - [`pseudocode`]: fixed listings and the step-to-line mapping
//! - [`explain`]: natural-language step descriptions at two detail levels
//! - [`tree`]: the algorithm state tree summary
//! - [`complexity`]: Big-O strings and actual-vs-theoretical figures
//! - [`report`]: the exportable flat-text analysis report
//!
//! None of these touch the terminal; the `ui` layer decides how each
//! piece is drawn.

pub mod complexity;
pub mod explain;
pub mod pseudocode;
pub mod report;
pub mod tree;

// Re-export the adapter entry points for convenience
pub use complexity::{actual, theoretical, total_operations, ComplexityProfile, Performance};
pub use explain::{explain, Explanation};
pub use pseudocode::{line_focus, listing, LineFocus};
pub use report::{algorithm_explanation, render_report, report_filename};
pub use tree::{state_tree, TreeNode};
