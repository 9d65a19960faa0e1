// Trace generators for the three supported sorting algorithms

use crate::trace::step::{Step, StepStats};

/// The sorting algorithms the generator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
}

impl Algorithm {
    /// All algorithms, in selection order
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge];

    /// Display name, as accepted by [`generate`]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Parse a display name. Only the exact names returned by
    /// [`Algorithm::name`] are recognized.
    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name {
            "Bubble Sort" => Some(Algorithm::Bubble),
            "Insertion Sort" => Some(Algorithm::Insertion),
            "Merge Sort" => Some(Algorithm::Merge),
            _ => None,
        }
    }

    /// Cycle to the next algorithm in selection order
    pub fn next(self) -> Algorithm {
        match self {
            Algorithm::Bubble => Algorithm::Insertion,
            Algorithm::Insertion => Algorithm::Merge,
            Algorithm::Merge => Algorithm::Bubble,
        }
    }

    /// Whether this algorithm reports recursion depth in its statistics
    pub fn is_recursive(self) -> bool {
        matches!(self, Algorithm::Merge)
    }

    /// Generate the full step trace for this algorithm over `values`.
    ///
    /// The input is never mutated; each generator works on its own copy.
    pub fn steps(self, values: &[i64]) -> Vec<Step> {
        match self {
            Algorithm::Bubble => bubble_steps(values),
            Algorithm::Insertion => insertion_steps(values),
            Algorithm::Merge => merge_steps(values),
        }
    }
}

/// Generate a trace by algorithm display name.
///
/// An unrecognized name yields an empty trace rather than an error;
/// callers render an empty trace as "no data".
pub fn generate(name: &str, values: &[i64]) -> Vec<Step> {
    match Algorithm::from_name(name) {
        Some(algorithm) => algorithm.steps(values),
        None => Vec::new(),
    }
}

/// Bubble sort: adjacent passes, swap on strict inversion.
///
/// Emits a `Compare` before every adjacent check, a `Swap` only when the
/// left element strictly exceeds the right, one `MarkSorted` for the tail
/// position finalized by each pass, and a trailing `MarkSorted` for index 0
/// whenever the input is non-empty. The trailing mark can repeat a position
/// already covered; consumers treat re-marking as a no-op.
pub fn bubble_steps(values: &[i64]) -> Vec<Step> {
    let n = values.len();
    let mut working = values.to_vec();
    let mut steps = Vec::new();
    let mut comparisons = 0;
    let mut swaps = 0;

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            comparisons += 1;
            steps.push(Step::Compare {
                left: j,
                right: j + 1,
                stats: StepStats {
                    comparisons,
                    swaps,
                    ..StepStats::default()
                },
            });
            if working[j] > working[j + 1] {
                swaps += 1;
                working.swap(j, j + 1);
                steps.push(Step::Swap {
                    left: j,
                    right: j + 1,
                    stats: StepStats {
                        comparisons,
                        swaps,
                        ..StepStats::default()
                    },
                });
            }
        }
        // The largest remaining element has bubbled into its final slot
        steps.push(Step::MarkSorted {
            index: n - i - 1,
            stats: StepStats {
                comparisons,
                swaps,
                ..StepStats::default()
            },
        });
    }

    if n > 0 {
        steps.push(Step::MarkSorted {
            index: 0,
            stats: StepStats {
                comparisons,
                swaps,
                ..StepStats::default()
            },
        });
    }

    steps
}

/// Insertion sort: grow a sorted prefix by shifting and placing a key.
///
/// For each outer index an initial `Compare` against the left neighbor is
/// emitted before the shift loop. Each shift is an `Overwrite` of the slot
/// to the right, followed by a re-emitted `Compare` while a further
/// neighbor exists. The key placement is one final `Overwrite`, emitted
/// unconditionally even when nothing shifted. Shifts and placements both
/// count as writes.
pub fn insertion_steps(values: &[i64]) -> Vec<Step> {
    let n = values.len();
    let mut working = values.to_vec();
    let mut steps = Vec::new();
    let mut comparisons = 0;
    let mut writes = 0;

    for i in 1..n {
        let key = working[i];
        // slot is the position the key would currently land in
        let mut slot = i;

        comparisons += 1;
        steps.push(Step::Compare {
            left: slot - 1,
            right: i,
            stats: StepStats {
                comparisons,
                writes,
                ..StepStats::default()
            },
        });

        while slot > 0 && working[slot - 1] > key {
            writes += 1;
            steps.push(Step::Overwrite {
                index: slot,
                value: working[slot - 1],
                stats: StepStats {
                    comparisons,
                    writes,
                    ..StepStats::default()
                },
            });
            working[slot] = working[slot - 1];
            slot -= 1;

            if slot > 0 {
                comparisons += 1;
                steps.push(Step::Compare {
                    left: slot - 1,
                    right: i,
                    stats: StepStats {
                        comparisons,
                        writes,
                        ..StepStats::default()
                    },
                });
            }
        }

        writes += 1;
        steps.push(Step::Overwrite {
            index: slot,
            value: key,
            stats: StepStats {
                comparisons,
                writes,
                ..StepStats::default()
            },
        });
        working[slot] = key;
    }

    for index in 0..n {
        steps.push(Step::MarkSorted {
            index,
            stats: StepStats {
                comparisons,
                writes,
                ..StepStats::default()
            },
        });
    }

    steps
}

/// Merge sort: recursive divide over inclusive index ranges.
///
/// Depth is incremented on entry and decremented on exit of every
/// recursive call, with the peak retained across the whole run. Each merge
/// emits a `Compare` before every interleave decision (ties prefer the
/// left half, keeping the sort stable) and one `Overwrite` per placed
/// value, including the drain phases.
pub fn merge_steps(values: &[i64]) -> Vec<Step> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut run = MergeRun {
        working: values.to_vec(),
        steps: Vec::new(),
        comparisons: 0,
        writes: 0,
        depth: 0,
        max_depth: 0,
    };
    run.sort(0, values.len() - 1);

    let final_stats = run.stats();
    let mut steps = run.steps;
    for index in 0..values.len() {
        steps.push(Step::MarkSorted {
            index,
            stats: final_stats,
        });
    }

    steps
}

/// Accumulator threaded through one merge sort run
struct MergeRun {
    working: Vec<i64>,
    steps: Vec<Step>,
    comparisons: usize,
    writes: usize,
    depth: usize,
    max_depth: usize,
}

impl MergeRun {
    fn sort(&mut self, left: usize, right: usize) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        if left < right {
            let mid = left + (right - left) / 2;
            self.sort(left, mid);
            self.sort(mid + 1, right);
            self.merge(left, mid, right);
        }
        self.depth -= 1;
    }

    fn merge(&mut self, left: usize, mid: usize, right: usize) {
        let lower = self.working[left..=mid].to_vec();
        let upper = self.working[mid + 1..=right].to_vec();
        let mut i = 0;
        let mut j = 0;
        let mut k = left;

        while i < lower.len() && j < upper.len() {
            self.comparisons += 1;
            let stats = self.stats();
            // Indices name the positions the candidates came from
            self.steps.push(Step::Compare {
                left: left + i,
                right: mid + 1 + j,
                stats,
            });

            let value = if lower[i] <= upper[j] {
                let value = lower[i];
                i += 1;
                value
            } else {
                let value = upper[j];
                j += 1;
                value
            };
            self.write(k, value);
            k += 1;
        }

        while i < lower.len() {
            self.write(k, lower[i]);
            i += 1;
            k += 1;
        }

        while j < upper.len() {
            self.write(k, upper[j]);
            j += 1;
            k += 1;
        }
    }

    /// Emit an `Overwrite` and apply it to the working array
    fn write(&mut self, index: usize, value: i64) {
        self.writes += 1;
        let stats = self.stats();
        self.steps.push(Step::Overwrite {
            index,
            value,
            stats,
        });
        self.working[index] = value;
    }

    fn stats(&self) -> StepStats {
        StepStats {
            comparisons: self.comparisons,
            swaps: 0,
            writes: self.writes,
            recursion_depth: self.depth,
            max_recursion_depth: self.max_depth,
        }
    }
}
