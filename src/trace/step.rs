//! Atomic step records emitted by the trace generators
//!
//! This module defines the [`Step`] enum, one record per atomic sorting
//! operation. A trace is an ordered `Vec<Step>` whose index is the step's
//! temporal identity; steps are immutable once generated.
//!
//! # Step Kinds
//!
//! - [`Step::Compare`]: inspect two positions, no mutation
//! - [`Step::Swap`]: exchange the values at two positions
//! - [`Step::Overwrite`]: write one value into one position (insertion
//!   shifts and merge writes)
//! - [`Step::MarkSorted`]: flag a position as finalized, no mutation
//!
//! # Embedded Statistics
//!
//! Every variant carries a [`StepStats`] snapshot valid *after* the step
//! executes, so seeking to any trace index gives the cumulative counters
//! without replaying the prefix. `MarkSorted` repeats the previous
//! counters unchanged.

/// Cumulative operation counters, valid as of after the owning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Comparisons performed so far (all algorithms)
    pub comparisons: usize,
    /// Swaps performed so far (bubble sort)
    pub swaps: usize,
    /// Array writes performed so far (insertion shifts, merge writes)
    pub writes: usize,
    /// Recursion depth at the time of the step (merge sort)
    pub recursion_depth: usize,
    /// Peak recursion depth observed over the whole run (merge sort)
    pub max_recursion_depth: usize,
}

/// One atomic operation in a sorting trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Compare {
        left: usize,
        right: usize,
        stats: StepStats,
    },
    Swap {
        left: usize,
        right: usize,
        stats: StepStats,
    },
    Overwrite {
        index: usize,
        value: i64,
        stats: StepStats,
    },
    MarkSorted {
        index: usize,
        stats: StepStats,
    },
}

/// Discriminant tag for a [`Step`], used by highlights and view code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Compare,
    Swap,
    Overwrite,
    MarkSorted,
}

impl StepKind {
    /// Short lowercase label for display
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Overwrite => "overwrite",
            StepKind::MarkSorted => "mark-sorted",
        }
    }
}

/// The visual focus derived from a step: which operation, at which indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub kind: StepKind,
    pub indices: Vec<usize>,
}

impl Step {
    /// Get the cumulative statistics embedded in this step
    pub fn stats(&self) -> StepStats {
        match self {
            Step::Compare { stats, .. }
            | Step::Swap { stats, .. }
            | Step::Overwrite { stats, .. }
            | Step::MarkSorted { stats, .. } => *stats,
        }
    }

    /// Get the kind tag for this step
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Compare { .. } => StepKind::Compare,
            Step::Swap { .. } => StepKind::Swap,
            Step::Overwrite { .. } => StepKind::Overwrite,
            Step::MarkSorted { .. } => StepKind::MarkSorted,
        }
    }

    /// Get the array positions this step touches (one or two)
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Step::Compare { left, right, .. } | Step::Swap { left, right, .. } => {
                vec![left, right]
            }
            Step::Overwrite { index, .. } | Step::MarkSorted { index, .. } => vec![index],
        }
    }

    /// Derive the highlight for this step
    pub fn highlight(&self) -> Highlight {
        Highlight {
            kind: self.kind(),
            indices: self.indices(),
        }
    }

    /// Apply this step's structural mutation to an array.
    ///
    /// `Swap` exchanges two positions and `Overwrite` writes one;
    /// `Compare` and `MarkSorted` leave the array untouched. Out-of-range
    /// indices are ignored rather than faulting, so a step can always be
    /// replayed against any array.
    pub fn apply_to(&self, values: &mut [i64]) {
        match *self {
            Step::Swap { left, right, .. } => {
                if left < values.len() && right < values.len() {
                    values.swap(left, right);
                }
            }
            Step::Overwrite { index, value, .. } => {
                if let Some(slot) = values.get_mut(index) {
                    *slot = value;
                }
            }
            Step::Compare { .. } | Step::MarkSorted { .. } => {}
        }
    }
}
