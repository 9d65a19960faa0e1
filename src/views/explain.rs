//! Natural-language explanations for individual steps
//!
//! Two registers per step: a one-line summary and a longer teaching
//! paragraph revealed on demand. Sentences talk about positions, and
//! about values only when the step itself carries one, so the adapter
//! needs nothing beyond the step.

use crate::trace::{Algorithm, Step};

/// A step described in prose, at two levels of detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub simple: String,
    pub detailed: String,
}

impl Explanation {
    fn new(simple: impl Into<String>, detailed: impl Into<String>) -> Self {
        Explanation {
            simple: simple.into(),
            detailed: detailed.into(),
        }
    }
}

/// Describe a step in natural language.
///
/// `None` means playback has not started. Step kinds an algorithm has no
/// specific wording for get a generic sentence, which covers the
/// trailing mark-sorted sweeps of insertion and merge sort.
pub fn explain(algorithm: Algorithm, step: Option<&Step>) -> Explanation {
    let step = match step {
        Some(step) => step,
        None => return Explanation::new("Ready to start...", ""),
    };

    match (algorithm, *step) {
        (Algorithm::Bubble, Step::Compare { left, right, .. }) => Explanation::new(
            format!("Looking at positions {left} and {right}: comparing their values."),
            format!(
                "If the value at position {left} is greater than the one at position \
                 {right}, they need to be swapped to maintain ascending order."
            ),
        ),
        (Algorithm::Bubble, Step::Swap { left, right, .. }) => Explanation::new(
            format!("Swapping positions {left} ↔ {right}"),
            format!(
                "Moving the larger value to position {right} and the smaller value \
                 to position {left}."
            ),
        ),
        (Algorithm::Bubble, Step::MarkSorted { index, .. }) => Explanation::new(
            format!("Position {index} is now in its final sorted spot!"),
            format!(
                "After each pass through the array, we know that the largest unsorted \
                 element has \"bubbled up\" to its correct position. Position {index} \
                 is now sorted."
            ),
        ),
        (Algorithm::Insertion, Step::Compare { left, right, .. }) => Explanation::new(
            format!("Comparing the key from position {right} with the value at position {left}."),
            format!(
                "In Insertion Sort, we're building a sorted portion from left to right. \
                 We're checking where the key from position {right} belongs in our \
                 sorted sequence."
            ),
        ),
        (Algorithm::Insertion, Step::Overwrite { index, value, .. }) => Explanation::new(
            format!("Moving {value} into position {index}."),
            format!(
                "Found the right spot for {value}. We shift larger elements right \
                 until we find where this value belongs in our sorted sequence."
            ),
        ),
        (Algorithm::Merge, Step::Compare { left, right, .. }) => Explanation::new(
            format!(
                "Comparing position {left} from the left half with position {right} \
                 from the right half."
            ),
            "During merging, we pick the smaller value of the two halves to build \
             our sorted result.",
        ),
        (Algorithm::Merge, Step::Overwrite { index, value, .. }) => Explanation::new(
            format!("Placing {value} at position {index}."),
            format!(
                "Adding {value} to our merged result. We're combining our sorted \
                 halves in order from smallest to largest."
            ),
        ),
        _ => Explanation::new(
            "Processing next step...",
            "The algorithm is working through its sorting steps.",
        ),
    }
}
