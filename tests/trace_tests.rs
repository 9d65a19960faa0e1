// Integration tests for the trace generators and snapshot replay

use sortty::snapshot::build_snapshots;
use sortty::trace::{generate, Algorithm, Step, StepStats};

/// Flatten a trace into (kind, indices) pairs for shape assertions
fn shape(steps: &[Step]) -> Vec<(&'static str, Vec<usize>)> {
    steps
        .iter()
        .map(|step| (step.kind().label(), step.indices()))
        .collect()
}

#[test]
fn test_bubble_trace_for_small_array() {
    let steps = Algorithm::Bubble.steps(&[3, 1, 2]);

    assert_eq!(
        shape(&steps),
        vec![
            ("compare", vec![0, 1]),
            ("swap", vec![0, 1]),
            ("compare", vec![1, 2]),
            ("swap", vec![1, 2]),
            ("mark-sorted", vec![2]),
            ("compare", vec![0, 1]),
            ("mark-sorted", vec![1]),
            ("mark-sorted", vec![0]),
        ],
        "bubble trace shape for [3,1,2]"
    );

    let last = steps.last().expect("trace should not be empty");
    assert_eq!(last.stats().comparisons, 3, "three comparisons in total");
    assert_eq!(last.stats().swaps, 2, "two swaps in total");
    assert_eq!(last.stats().writes, 0, "bubble sort never overwrites");
}

#[test]
fn test_bubble_marks_every_position_including_zero() {
    // The final pass marker for index 0 is emitted after the outer loop
    let steps = Algorithm::Bubble.steps(&[2, 1]);
    let marked: Vec<usize> = steps
        .iter()
        .filter_map(|step| match step {
            Step::MarkSorted { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(marked, vec![1, 0], "marks run from the top down to zero");
}

#[test]
fn test_bubble_sorted_input_has_no_swaps() {
    let steps = Algorithm::Bubble.steps(&[1, 2, 3, 4]);

    assert!(
        !steps.iter().any(|step| matches!(step, Step::Swap { .. })),
        "sorted input should produce no swaps"
    );
    let last = steps.last().expect("trace should not be empty");
    assert_eq!(last.stats().comparisons, 6, "3 + 2 + 1 comparisons");
}

#[test]
fn test_insertion_trace_for_reversed_pair() {
    let steps = Algorithm::Insertion.steps(&[2, 1]);

    assert_eq!(
        shape(&steps),
        vec![
            ("compare", vec![0, 1]),
            ("overwrite", vec![1]),
            ("overwrite", vec![0]),
            ("mark-sorted", vec![0]),
            ("mark-sorted", vec![1]),
        ],
        "insertion trace shape for [2,1]"
    );

    // The shift writes the larger value right, then the key lands at 0
    match steps[1] {
        Step::Overwrite { index: 1, value: 2, .. } => {}
        other => panic!("Expected Overwrite(1, 2), got {:?}", other),
    }
    match steps[2] {
        Step::Overwrite { index: 0, value: 1, .. } => {}
        other => panic!("Expected Overwrite(0, 1), got {:?}", other),
    }

    let last = steps.last().expect("trace should not be empty");
    assert_eq!(last.stats().comparisons, 1);
    assert_eq!(last.stats().writes, 2);
    assert_eq!(last.stats().swaps, 0, "insertion counts writes, not swaps");
}

#[test]
fn test_insertion_writes_key_even_when_already_placed() {
    // Each outer iteration ends with the key written back, shifts or not
    let steps = Algorithm::Insertion.steps(&[1, 2]);
    assert_eq!(
        shape(&steps),
        vec![
            ("compare", vec![0, 1]),
            ("overwrite", vec![1]),
            ("mark-sorted", vec![0]),
            ("mark-sorted", vec![1]),
        ]
    );
}

#[test]
fn test_merge_trace_for_reversed_pair() {
    let steps = Algorithm::Merge.steps(&[5, 3]);

    assert_eq!(
        shape(&steps),
        vec![
            ("compare", vec![0, 1]),
            ("overwrite", vec![0]),
            ("overwrite", vec![1]),
            ("mark-sorted", vec![0]),
            ("mark-sorted", vec![1]),
        ],
        "merge trace shape for [5,3]"
    );

    let last = steps.last().expect("trace should not be empty");
    assert_eq!(last.stats().comparisons, 1);
    assert_eq!(last.stats().writes, 2);
    assert_eq!(last.stats().recursion_depth, 0, "depth unwinds to zero");
    assert_eq!(last.stats().max_recursion_depth, 2, "two nested calls");
}

#[test]
fn test_merge_prefers_left_on_ties() {
    // Equal heads must come from the left half to keep the sort stable
    let steps = Algorithm::Merge.steps(&[2, 2]);
    match steps[1] {
        Step::Overwrite { index: 0, value: 2, stats } => {
            assert_eq!(stats.comparisons, 1);
        }
        other => panic!("Expected the left 2 written first, got {:?}", other),
    }
}

#[test]
fn test_merge_single_element() {
    let steps = Algorithm::Merge.steps(&[7]);
    assert_eq!(shape(&steps), vec![("mark-sorted", vec![0])]);
    let last = steps.last().expect("trace should not be empty");
    assert_eq!(last.stats().max_recursion_depth, 1, "one call, no recursion");
}

#[test]
fn test_empty_input_produces_empty_traces() {
    for algorithm in Algorithm::ALL {
        assert!(
            algorithm.steps(&[]).is_empty(),
            "{} should produce no steps for an empty array",
            algorithm.name()
        );
    }
}

#[test]
fn test_generate_dispatches_by_display_name() {
    let values = [3, 1, 2];
    for algorithm in Algorithm::ALL {
        let named = generate(algorithm.name(), &values);
        let direct = algorithm.steps(&values);
        assert_eq!(
            shape(&named),
            shape(&direct),
            "generate(\"{}\") should match the enum dispatch",
            algorithm.name()
        );
    }
}

#[test]
fn test_statistics_never_decrease_across_a_trace() {
    let base = [9, 4, 7, 1, 8, 2, 6, 3, 5];
    for algorithm in Algorithm::ALL {
        let steps = algorithm.steps(&base);
        let mut previous = StepStats::default();
        for (i, step) in steps.iter().enumerate() {
            let stats = step.stats();
            assert!(
                stats.comparisons >= previous.comparisons,
                "{} step {}: comparisons fell from {} to {}",
                algorithm.name(),
                i,
                previous.comparisons,
                stats.comparisons
            );
            assert!(
                stats.swaps >= previous.swaps,
                "{} step {}: swaps fell from {} to {}",
                algorithm.name(),
                i,
                previous.swaps,
                stats.swaps
            );
            assert!(
                stats.writes >= previous.writes,
                "{} step {}: writes fell from {} to {}",
                algorithm.name(),
                i,
                previous.writes,
                stats.writes
            );
            assert!(
                stats.max_recursion_depth >= previous.max_recursion_depth,
                "{} step {}: peak depth fell from {} to {}",
                algorithm.name(),
                i,
                previous.max_recursion_depth,
                stats.max_recursion_depth
            );
            previous = stats;
        }
    }
}

#[test]
fn test_generate_unknown_name_yields_empty_trace() {
    assert!(generate("Quick Sort", &[3, 1, 2]).is_empty());
    assert!(generate("", &[3, 1, 2]).is_empty());
}

// === SNAPSHOT REPLAY TESTS ===

#[test]
fn test_snapshot_count_and_endpoints() {
    let base = vec![3, 1, 2];
    let steps = Algorithm::Bubble.steps(&base);
    let snapshots = build_snapshots(&base, &steps);

    assert_eq!(
        snapshots.len(),
        steps.len() + 1,
        "one snapshot per step plus the initial array"
    );
    assert_eq!(snapshots[0], base, "first snapshot is the unsorted array");
    assert_eq!(
        snapshots.last().expect("at least one snapshot"),
        &vec![1, 2, 3],
        "last snapshot is fully sorted"
    );
}

#[test]
fn test_snapshots_differ_only_at_touched_positions() {
    let base = vec![5, 3, 8, 1];
    for algorithm in Algorithm::ALL {
        check_snapshot_consistency(algorithm, &base);
    }
}

/// Assert that consecutive snapshots differ only at the positions the
/// step between them touches
fn check_snapshot_consistency(algorithm: Algorithm, base: &[i64]) {
    let steps = algorithm.steps(base);
    let snapshots = build_snapshots(base, &steps);

    for (i, step) in steps.iter().enumerate() {
        let before = &snapshots[i];
        let after = &snapshots[i + 1];

        // Positions the step does not touch must carry over unchanged
        let touched = step.indices();
        for (position, (old, new)) in before.iter().zip(after).enumerate() {
            if !touched.contains(&position) {
                assert_eq!(
                    old,
                    new,
                    "{} step {} ({:?}) changed untouched position {}",
                    algorithm.name(),
                    i,
                    step.kind(),
                    position
                );
            }
        }

        match *step {
            Step::Swap { left, right, .. } => {
                assert_eq!(after[left], before[right], "swap at step {}", i);
                assert_eq!(after[right], before[left], "swap at step {}", i);
            }
            Step::Overwrite { index, value, .. } => {
                assert_eq!(after[index], value, "overwrite at step {}", i);
            }
            Step::Compare { .. } | Step::MarkSorted { .. } => {
                assert_eq!(
                    before,
                    after,
                    "{} step {} ({:?}) should leave the array unchanged",
                    algorithm.name(),
                    i,
                    step.kind()
                );
            }
        }
    }
}

#[test]
fn test_all_algorithms_end_sorted() {
    let base = vec![9, 4, 7, 1, 8, 2, 6, 3, 5];
    let mut expected = base.clone();
    expected.sort_unstable();

    for algorithm in Algorithm::ALL {
        let steps = algorithm.steps(&base);
        let snapshots = build_snapshots(&base, &steps);
        assert_eq!(
            snapshots.last().expect("at least one snapshot"),
            &expected,
            "{} should leave the array sorted",
            algorithm.name()
        );
    }
}

#[test]
fn test_snapshots_handle_duplicates() {
    let base = vec![4, 2, 4, 1];
    let steps = Algorithm::Merge.steps(&base);
    let snapshots = build_snapshots(&base, &steps);
    assert_eq!(
        snapshots.last().expect("at least one snapshot"),
        &vec![1, 2, 4, 4]
    );
}
