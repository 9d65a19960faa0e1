// Integration tests for the view adapters

use sortty::trace::{Algorithm, Step, StepStats};
use sortty::views::complexity::{actual, theoretical, total_operations};
use sortty::views::explain::explain;
use sortty::views::pseudocode::{line_focus, listing};
use sortty::views::report::{render_report, report_filename};
use sortty::views::tree::state_tree;

fn compare(left: usize, right: usize, stats: StepStats) -> Step {
    Step::Compare { left, right, stats }
}

fn swap(left: usize, right: usize, stats: StepStats) -> Step {
    Step::Swap { left, right, stats }
}

fn overwrite(index: usize, value: i64, stats: StepStats) -> Step {
    Step::Overwrite { index, value, stats }
}

fn mark_sorted(index: usize, stats: StepStats) -> Step {
    Step::MarkSorted { index, stats }
}

// === PSEUDOCODE TESTS ===

#[test]
fn test_listing_lengths() {
    assert_eq!(listing(Algorithm::Bubble).len(), 7);
    assert_eq!(listing(Algorithm::Insertion).len(), 8);
    assert_eq!(listing(Algorithm::Merge).len(), 12);
}

#[test]
fn test_line_focus_without_a_step() {
    let focus = line_focus(Algorithm::Bubble, None);
    assert_eq!(focus.line, 0);
    assert_eq!(focus.annotation, "Ready.");
    assert!(focus.inline.is_empty());
}

#[test]
fn test_bubble_line_mapping() {
    let stats = StepStats::default();

    let focus = line_focus(Algorithm::Bubble, Some(&compare(0, 1, stats)));
    assert_eq!(focus.line, 4, "compare sits on the if line");
    assert_eq!(focus.annotation, "Comparing indices 0 and 1");

    let focus = line_focus(Algorithm::Bubble, Some(&swap(0, 1, stats)));
    assert_eq!(focus.line, 5);
    assert_eq!(focus.annotation, "Swapping indices 0 and 1");

    let focus = line_focus(Algorithm::Bubble, Some(&mark_sorted(2, stats)));
    assert_eq!(focus.line, 6);
    assert_eq!(focus.annotation, "Index 2 marked sorted");
}

#[test]
fn test_bubble_mapping_falls_back_for_foreign_steps() {
    // Bubble sort never emits overwrites; the mapping still answers
    let stats = StepStats::default();
    let focus = line_focus(Algorithm::Bubble, Some(&overwrite(1, 9, stats)));
    assert_eq!(focus.line, 3);
    assert_eq!(focus.annotation, "overwrite");
}

#[test]
fn test_insertion_line_mapping_with_inline_value() {
    let stats = StepStats::default();

    let focus = line_focus(Algorithm::Insertion, Some(&compare(2, 3, stats)));
    assert_eq!(focus.line, 5);

    let focus = line_focus(Algorithm::Insertion, Some(&overwrite(3, 42, stats)));
    assert_eq!(focus.line, 7, "writes land on the key placement line");
    assert_eq!(focus.annotation, "Write 42 to index 3");
    assert_eq!(focus.inline, "value=42");
}

#[test]
fn test_merge_line_mapping() {
    let stats = StepStats::default();

    let focus = line_focus(Algorithm::Merge, Some(&compare(2, 5, stats)));
    assert_eq!(focus.line, 8);
    assert_eq!(focus.annotation, "Comparing left and right (indices 2,5)");

    let focus = line_focus(Algorithm::Merge, Some(&overwrite(4, 7, stats)));
    assert_eq!(focus.line, 9);
    assert_eq!(focus.inline, "value=7");

    let focus = line_focus(Algorithm::Merge, Some(&mark_sorted(0, stats)));
    assert_eq!(focus.line, 5, "markers fall back to the merge return line");
}

// === EXPLANATION TESTS ===

#[test]
fn test_explain_without_a_step() {
    let explanation = explain(Algorithm::Bubble, None);
    assert_eq!(explanation.simple, "Ready to start...");
    assert!(explanation.detailed.is_empty());
}

#[test]
fn test_explain_bubble_steps() {
    let stats = StepStats::default();

    let explanation = explain(Algorithm::Bubble, Some(&compare(0, 1, stats)));
    assert!(
        explanation.simple.contains("positions 0 and 1"),
        "unexpected text: {}",
        explanation.simple
    );

    let explanation = explain(Algorithm::Bubble, Some(&mark_sorted(4, stats)));
    assert_eq!(
        explanation.simple,
        "Position 4 is now in its final sorted spot!"
    );
    assert!(explanation.detailed.contains("\"bubbled up\""));
}

#[test]
fn test_explain_uses_step_values_for_writes() {
    let stats = StepStats::default();

    let explanation = explain(Algorithm::Insertion, Some(&overwrite(3, 42, stats)));
    assert_eq!(explanation.simple, "Moving 42 into position 3.");

    let explanation = explain(Algorithm::Merge, Some(&overwrite(2, 7, stats)));
    assert_eq!(explanation.simple, "Placing 7 at position 2.");
}

#[test]
fn test_explain_falls_back_for_unmatched_kinds() {
    // Insertion and merge have no wording for their trailing markers
    let stats = StepStats::default();
    for algorithm in [Algorithm::Insertion, Algorithm::Merge] {
        let explanation = explain(algorithm, Some(&mark_sorted(0, stats)));
        assert_eq!(explanation.simple, "Processing next step...");
    }
}

// === STATE TREE TESTS ===

#[test]
fn test_tree_absent_before_playback() {
    assert!(state_tree(Algorithm::Bubble, 0, None).is_none());
}

#[test]
fn test_tree_shape_for_bubble() {
    let stats = StepStats {
        comparisons: 24,
        swaps: 4,
        ..Default::default()
    };
    let step = swap(3, 4, stats);
    let root = state_tree(Algorithm::Bubble, 12, Some(&step)).expect("tree for a step");

    assert_eq!(root.name, "Bubble Sort State");
    let keys: Vec<&str> = root.attributes.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, vec!["step", "comparisons", "swaps"]);
    assert_eq!(root.attributes[0].1, "Step 12");
    assert_eq!(root.attributes[2].1, "Swaps: 4");

    assert_eq!(root.children.len(), 2);
    let action = &root.children[0];
    assert_eq!(action.name, "Current Action");
    assert_eq!(action.attributes[0].1, "swap");
    assert_eq!(action.attributes[1].1, "Swapping elements at [3 ↔ 4]");

    let progress = &root.children[1];
    assert_eq!(progress.name, "Progress");
    assert_eq!(
        progress.attributes[0].1, "50% Complete",
        "12 of 24 comparisons"
    );
}

#[test]
fn test_tree_counters_vary_by_algorithm() {
    let stats = StepStats {
        comparisons: 3,
        writes: 2,
        recursion_depth: 1,
        max_recursion_depth: 2,
        ..Default::default()
    };
    let step = overwrite(0, 5, stats);

    let insertion = state_tree(Algorithm::Insertion, 4, Some(&step)).expect("tree");
    let keys: Vec<&str> = insertion.attributes.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, vec!["step", "comparisons", "writes"]);

    let merge = state_tree(Algorithm::Merge, 4, Some(&step)).expect("tree");
    let keys: Vec<&str> = merge.attributes.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, vec!["step", "comparisons", "writes", "depth"]);
    assert_eq!(merge.attributes[3].1, "Depth: 1");
}

#[test]
fn test_tree_progress_clamps_at_one_hundred() {
    let stats = StepStats {
        comparisons: 5,
        ..Default::default()
    };
    let step = compare(0, 1, stats);
    let root = state_tree(Algorithm::Bubble, 10, Some(&step)).expect("tree");
    assert_eq!(root.children[1].attributes[0].1, "100% Complete");
}

#[test]
fn test_tree_progress_survives_zero_counters() {
    let step = mark_sorted(0, StepStats::default());
    let root = state_tree(Algorithm::Merge, 0, Some(&step)).expect("tree");
    assert_eq!(root.children[1].attributes[0].1, "0% Complete");
}

// === COMPLEXITY TESTS ===

#[test]
fn test_theoretical_quadratic_profile() {
    let profile = theoretical(Algorithm::Bubble, 20);
    assert_eq!(profile.average, "O(n²) = 20² = 400 operations");
    assert_eq!(profile.best, "O(n) = 20 operations");
    assert_eq!(profile.worst, profile.average);
    assert_eq!(profile.space, "O(1) - constant space");
}

#[test]
fn test_theoretical_merge_profile() {
    let profile = theoretical(Algorithm::Merge, 16);
    assert_eq!(profile.average, "O(n log n) ≈ 16 × 4 = 64 operations");
    assert_eq!(profile.space, "O(n) = 16 extra space");
}

#[test]
fn test_actual_performance_assessments() {
    let better = actual(
        Algorithm::Bubble,
        10,
        StepStats {
            comparisons: 30,
            swaps: 10,
            ..Default::default()
        },
    );
    assert_eq!(better.operations, 40);
    assert_eq!(better.theoretical, 100);
    assert!((better.ratio - 0.4).abs() < 1e-9);
    assert_eq!(better.assessment, "Better than expected");

    let expected = actual(
        Algorithm::Bubble,
        10,
        StepStats {
            comparisons: 60,
            swaps: 40,
            ..Default::default()
        },
    );
    assert_eq!(expected.assessment, "As expected");

    let worse = actual(
        Algorithm::Bubble,
        10,
        StepStats {
            comparisons: 100,
            swaps: 30,
            ..Default::default()
        },
    );
    assert_eq!(worse.assessment, "Worse than expected");
}

#[test]
fn test_actual_performance_merge_counts_writes() {
    let performance = actual(
        Algorithm::Merge,
        8,
        StepStats {
            comparisons: 10,
            writes: 14,
            ..Default::default()
        },
    );
    assert_eq!(performance.operations, 24);
    assert_eq!(performance.theoretical, 24, "8 * log2(8)");
    assert!((performance.ratio - 1.0).abs() < 1e-9);
}

#[test]
fn test_actual_performance_insertion_counts_comparisons_only() {
    let performance = actual(
        Algorithm::Insertion,
        10,
        StepStats {
            comparisons: 30,
            writes: 50,
            ..Default::default()
        },
    );
    assert_eq!(performance.operations, 30, "writes are not in the cost model");
}

#[test]
fn test_actual_performance_tiny_array_stays_finite() {
    let performance = actual(Algorithm::Merge, 1, StepStats::default());
    assert_eq!(performance.theoretical, 0);
    assert!((performance.ratio - 0.0).abs() < 1e-9);
}

#[test]
fn test_total_operations_sums_every_counter() {
    let stats = StepStats {
        comparisons: 5,
        swaps: 2,
        writes: 3,
        ..Default::default()
    };
    assert_eq!(total_operations(stats), 10);
}

// === REPORT TESTS ===

#[test]
fn test_report_before_playback() {
    let report = render_report(Algorithm::Bubble, 0, None);
    println!("Report:\n{}", report);

    assert!(report.contains("Algorithm Analysis Report"));
    assert!(report.contains("Algorithm: Bubble Sort"));
    assert!(report.contains("Current Step: 0"));
    assert!(report.contains("Current Action: N/A"));
    assert!(report.contains("Pseudocode Line: N/A"));
    assert!(report.contains("Bubble Sort repeatedly steps through the list"));
    assert!(report.contains("comparisons: 0"));
    assert!(report.contains("swaps: 0"));
    assert!(report.contains("Tree Graph Data:\nN/A"));
    assert!(report.contains("Step Details:\nN/A"));
    assert!(report.contains("Ready to start..."));
}

#[test]
fn test_report_for_a_swap_step() {
    let stats = StepStats {
        comparisons: 11,
        swaps: 4,
        ..Default::default()
    };
    let step = swap(3, 4, stats);
    let report = render_report(Algorithm::Bubble, 12, Some(&step));

    assert!(report.contains("Current Step: 12"));
    assert!(report.contains("Current Action: swap"));
    assert!(report.contains("Pseudocode Line: 6"), "1-based line number");
    assert!(report.contains("comparisons: 11"));
    assert!(report.contains("Swapping elements at [3 ↔ 4]"));
    assert!(report.contains("Swap {"), "raw step details are included");
}

#[test]
fn test_report_merge_includes_depth_counters() {
    let stats = StepStats {
        comparisons: 3,
        writes: 2,
        recursion_depth: 1,
        max_recursion_depth: 3,
        ..Default::default()
    };
    let step = overwrite(1, 9, stats);
    let report = render_report(Algorithm::Merge, 6, Some(&step));

    assert!(report.contains("recursion depth: 1"));
    assert!(report.contains("max recursion depth: 3"));
    assert!(report.contains("Placing 9 at position 1."));
}

#[test]
fn test_report_filenames() {
    assert_eq!(
        report_filename(Algorithm::Bubble),
        "Bubble_Sort_analysis_report.txt"
    );
    assert_eq!(
        report_filename(Algorithm::Merge),
        "Merge_Sort_analysis_report.txt"
    );
}
