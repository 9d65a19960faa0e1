// Snapshot replay for random seeking through a trace

use crate::trace::Step;

/// Replay a trace against an initial array, capturing every intermediate
/// state.
///
/// Returns `steps.len() + 1` arrays: index 0 is a copy of the initial
/// sequence, index `k` is the array after applying `steps[..k]`. Only
/// `Swap` and `Overwrite` mutate; `Compare` and `MarkSorted` replay as
/// no-ops, so consecutive snapshots around them are equal.
///
/// Every entry is an independent copy. Seeking to any index therefore
/// yields an isolated view that later seeks cannot disturb. The build is
/// O(n·m) in array length and trace length, paid once per selection.
pub fn build_snapshots(initial: &[i64], steps: &[Step]) -> Vec<Vec<i64>> {
    let mut snapshots = Vec::with_capacity(steps.len() + 1);
    snapshots.push(initial.to_vec());

    let mut working = initial.to_vec();
    for step in steps {
        step.apply_to(&mut working);
        snapshots.push(working.clone());
    }

    snapshots
}
