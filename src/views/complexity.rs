//! Theoretical complexity strings and actual-vs-theoretical comparison

use crate::trace::{Algorithm, StepStats};

/// Big-O summary for one algorithm at a concrete array size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityProfile {
    pub average: String,
    pub best: String,
    pub worst: String,
    pub space: String,
}

/// Worked-out complexity figures for an array of `n` elements
pub fn theoretical(algorithm: Algorithm, n: usize) -> ComplexityProfile {
    match algorithm {
        Algorithm::Bubble | Algorithm::Insertion => {
            let quadratic = format!("O(n²) = {n}² = {} operations", n * n);
            ComplexityProfile {
                average: quadratic.clone(),
                best: format!("O(n) = {n} operations"),
                worst: quadratic,
                space: "O(1) - constant space".to_string(),
            }
        }
        Algorithm::Merge => {
            let log = log2_rounded(n);
            let linearithmic = format!("O(n log n) ≈ {n} × {log} = {} operations", n * log);
            ComplexityProfile {
                average: linearithmic.clone(),
                best: linearithmic.clone(),
                worst: linearithmic,
                space: format!("O(n) = {n} extra space"),
            }
        }
    }
}

/// Operation counts measured so far, against the theoretical estimate
#[derive(Debug, Clone, PartialEq)]
pub struct Performance {
    /// Operations counted for this algorithm's dominant cost model
    pub operations: usize,
    /// Theoretical estimate for an array of this size, rounded
    pub theoretical: usize,
    /// `operations / theoretical`, zero when the estimate is zero
    pub ratio: f64,
    pub assessment: &'static str,
}

/// Compare the counters accumulated so far against the theoretical cost.
///
/// Merge sort counts comparisons plus writes; the quadratic algorithms
/// count comparisons plus swaps, which for insertion sort means
/// comparisons alone.
pub fn actual(algorithm: Algorithm, n: usize, stats: StepStats) -> Performance {
    let operations = match algorithm {
        Algorithm::Merge => stats.comparisons + stats.writes,
        Algorithm::Bubble | Algorithm::Insertion => stats.comparisons + stats.swaps,
    };

    let estimate = match algorithm {
        Algorithm::Bubble | Algorithm::Insertion => (n * n) as f64,
        Algorithm::Merge => {
            if n <= 1 {
                0.0
            } else {
                n as f64 * (n as f64).log2()
            }
        }
    };

    let ratio = if estimate > 0.0 {
        operations as f64 / estimate
    } else {
        0.0
    };
    let assessment = if ratio <= 0.8 {
        "Better than expected"
    } else if ratio <= 1.2 {
        "As expected"
    } else {
        "Worse than expected"
    };

    Performance {
        operations,
        theoretical: estimate.round() as usize,
        ratio,
        assessment,
    }
}

/// Every counted operation regardless of kind
pub fn total_operations(stats: StepStats) -> usize {
    stats.comparisons + stats.swaps + stats.writes
}

fn log2_rounded(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (n as f64).log2().round() as usize
    }
}
