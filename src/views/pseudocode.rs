//! Pseudocode listings and the step-to-line mapping
//!
//! Each algorithm has a fixed listing; a step maps onto exactly one line
//! of it, plus a sentence for the annotation area and, for insertion and
//! merge writes, a short inline tag showing the value being placed. The
//! mapping relies on the generators' emission policy being stable, which
//! is why that policy is reproduced bit-for-bit.

use crate::trace::{Algorithm, Step};

const BUBBLE: &[&str] = &[
    "function bubbleSort(array):",
    "  n = length(array)",
    "  for i = 0 to n-2:",
    "    for j = 0 to n-i-2:",
    "      if array[j] > array[j+1]:",
    "        swap array[j] and array[j+1]",
    "    mark array[n-i-1] as sorted",
];

const INSERTION: &[&str] = &[
    "function insertionSort(array):",
    "  for i = 1 to length(array)-1:",
    "    key = array[i]",
    "    j = i - 1",
    "    while j >= 0 and array[j] > key:",
    "      array[j+1] = array[j]  // shift right",
    "      j = j - 1",
    "    array[j+1] = key",
];

const MERGE: &[&str] = &[
    "function mergeSort(array):",
    "  if length(array) <= 1: return array",
    "  mid = floor(length/2)",
    "  left = mergeSort(array[0:mid])",
    "  right = mergeSort(array[mid:])",
    "  return merge(left, right)",
    "function merge(left,right):",
    "  while left and right:",
    "    if left[0] <= right[0]:",
    "      append left[0] to result",
    "    else:",
    "      append right[0] to result",
];

/// The fixed pseudocode listing for an algorithm
pub fn listing(algorithm: Algorithm) -> &'static [&'static str] {
    match algorithm {
        Algorithm::Bubble => BUBBLE,
        Algorithm::Insertion => INSERTION,
        Algorithm::Merge => MERGE,
    }
}

/// The active pseudocode line for one step, with its annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFocus {
    /// Zero-based index into [`listing`]
    pub line: usize,
    /// Sentence shown under the listing
    pub annotation: String,
    /// Short tag appended to the active line, empty when not applicable
    pub inline: String,
}

impl LineFocus {
    fn new(line: usize, annotation: impl Into<String>) -> Self {
        LineFocus {
            line,
            annotation: annotation.into(),
            inline: String::new(),
        }
    }
}

/// Map a step onto its algorithm's listing.
///
/// `None` means playback has not started: line 0, "Ready.". Step kinds an
/// algorithm never emits fall back to a structurally sensible line with
/// the kind label as the annotation.
pub fn line_focus(algorithm: Algorithm, step: Option<&Step>) -> LineFocus {
    let step = match step {
        Some(step) => step,
        None => return LineFocus::new(0, "Ready."),
    };

    match algorithm {
        Algorithm::Bubble => match *step {
            Step::Compare { left, right, .. } => {
                LineFocus::new(4, format!("Comparing indices {left} and {right}"))
            }
            Step::Swap { left, right, .. } => {
                LineFocus::new(5, format!("Swapping indices {left} and {right}"))
            }
            Step::MarkSorted { index, .. } => {
                LineFocus::new(6, format!("Index {index} marked sorted"))
            }
            _ => LineFocus::new(3, step.kind().label()),
        },
        Algorithm::Insertion => match *step {
            Step::Compare { left, right, .. } => {
                LineFocus::new(5, format!("Comparing {left} and {right}"))
            }
            Step::Overwrite { index, value, .. } => LineFocus {
                line: 7,
                annotation: format!("Write {value} to index {index}"),
                inline: format!("value={value}"),
            },
            _ => LineFocus::new(2, step.kind().label()),
        },
        Algorithm::Merge => match *step {
            Step::Compare { left, right, .. } => LineFocus::new(
                8,
                format!("Comparing left and right (indices {left},{right})"),
            ),
            Step::Overwrite { index, value, .. } => LineFocus {
                line: 9,
                annotation: format!("Writing {value} to merged array at index {index}"),
                inline: format!("value={value}"),
            },
            _ => LineFocus::new(5, step.kind().label()),
        },
    }
}
