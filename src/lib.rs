//! # Introduction
//!
//! sortty generates the full step trace of a sorting algorithm up front,
//! precomputes the array contents after every step, and lets a terminal UI
//! built with [ratatui](https://docs.rs/ratatui) walk that history forward
//! and backward at will.
//!
//! ## Playback pipeline
//!
//! ```text
//! Algorithm + Sequence → Trace → Snapshots → Player → TUI
//! ```
//!
//! 1. [`trace`]: the algorithm generators emit a deterministic [`trace::Step`]
//!    list, each step carrying cumulative [`trace::StepStats`].
//! 2. [`snapshot`]: replays the mutating steps to precompute the array
//!    contents after every step.
//! 3. [`playback`]: the [`playback::Player`] cursor over trace and snapshots,
//!    with a cancellable autoplay ticker.
//! 4. [`views`]: pure adapters turning the current step into pseudocode
//!    focus, prose explanations, a state tree, complexity figures, and a
//!    flat-text report.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble Sort, Insertion Sort, and Merge Sort, over `i64` sequences.

pub mod playback;
pub mod snapshot;
pub mod trace;
pub mod ui;
pub mod views;
