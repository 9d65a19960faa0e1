//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visible panes,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`bars`]: Array bar chart with per-element highlight colors
//! - [`pseudocode`]: Pseudocode listing with the active line and annotation
//! - [`explain`]: Natural-language explanation, toggling to the state tree
//! - [`stats`]: Operation counters and complexity figures
//! - [`status`]: Status bar with keybindings and playback state
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*_pane()` function plus any
//! associated data types. Render functions are stateless: everything they
//! show is derived from the playback state passed in, so a pane draws the
//! same picture for the same state no matter how it was reached.

pub mod bars;
pub mod explain;
pub mod pseudocode;
pub mod stats;
pub mod status;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, BarsRenderData};
pub use explain::{render_explain_pane, ExplainRenderData};
pub use pseudocode::render_pseudocode_pane;
pub use stats::{render_stats_pane, StatsRenderData};
pub use status::render_status_bar;
