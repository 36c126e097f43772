// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end solver tests.
//!
//! These validate that:
//! - Both solvers find the known optimum on small fixtures
//! - Disconnected graphs yield NoSpanningTree whatever the budget
//! - The paired-candidate solver is deterministic
//! - A longer randomized run with the same seed never does worse

mod common;

use common::load_graph;
use mfmst_search::solver::{
    considered_edges, ordered_edge_pairs, CandidateWidth, PairedCandidateSolver, RandomizedSolver,
};
use mfmst_search::state::statistics::Counters;
use mfmst_search::{solve, Budget, Solution, Solver, SpanningTree};
use std::time::Duration;

/// Generous wall clock, with an iteration cap so runs stay short and reproducible.
fn capped(iterations: u64) -> Budget {
    Budget::time(Duration::from_secs(30)).with_max_iterations(iterations)
}

fn sorted(edges: &[usize]) -> Vec<usize> {
    let mut edges = edges.to_vec();
    edges.sort_unstable();
    edges
}

#[test]
fn test_triangle_optimum_with_both_solvers() {
    let g = load_graph("test01.uwg");

    let paired = PairedCandidateSolver::new().solve(&g, capped(1_000));
    let tree = paired.tree().expect("paired solver finds a tree");
    assert_eq!(tree.bottleneck, 4);
    assert_eq!(sorted(&tree.edges), vec![1, 3]);

    let random = RandomizedSolver::seeded(2024).solve(&g, capped(1_000));
    let tree = random.tree().expect("randomized solver finds a tree");
    assert_eq!(tree.bottleneck, 4);
    assert_eq!(sorted(&tree.edges), vec![1, 3]);
}

#[test]
fn test02_optimum() {
    let g = load_graph("test02.uwg");

    let paired = PairedCandidateSolver::new().solve(&g, capped(1_000));
    assert_eq!(
        paired,
        Solution::Found(SpanningTree {
            edges: vec![2, 7, 3, 6],
            bottleneck: 16
        })
    );

    // 70 possible subsets; 5000 draws cover them all with overwhelming probability.
    let random = RandomizedSolver::seeded(11).solve(&g, capped(5_000));
    assert_eq!(random.bottleneck(), Some(16));
    assert_eq!(sorted(&random.tree().unwrap().edges), vec![2, 3, 6, 7]);
}

#[test]
fn test_disconnected_graph_has_no_tree() {
    let g = load_graph("disconnected.uwg");
    for budget in [Budget::time(Duration::ZERO), Budget::default()] {
        assert_eq!(solve(&g, budget), Solution::NoSpanningTree);
        assert_eq!(
            RandomizedSolver::seeded(3).solve(&g, budget),
            Solution::NoSpanningTree
        );
        assert_eq!(
            PairedCandidateSolver::new()
                .with_width(CandidateWidth::All)
                .solve(&g, budget),
            Solution::NoSpanningTree
        );
    }
}

#[test]
fn test_paired_solver_is_deterministic() {
    let g = load_graph("test04.uwg");
    let expected = Solution::Found(SpanningTree {
        edges: vec![2, 9, 4, 7, 6],
        bottleneck: 16,
    });
    for _ in 0..3 {
        let mut solver = PairedCandidateSolver::new();
        assert_eq!(solver.solve(&g, Budget::time(Duration::from_secs(30))), expected);
        assert_eq!(solver.statistics().get(Counters::Candidates), 6);
    }
}

#[test]
fn test_all_pairs_covers_every_combination() {
    let g = load_graph("test04.uwg");
    let mut solver = PairedCandidateSolver::new().with_width(CandidateWidth::All);
    let solution = solver.solve(&g, Budget::time(Duration::from_secs(30)));
    assert_eq!(solution.bottleneck(), Some(16));
    // C(10, 5)
    assert_eq!(solver.statistics().get(Counters::Candidates), 252);
}

#[test]
fn test_candidate_pool_for_test04() {
    let g = load_graph("test04.uwg");
    let pairs = ordered_edge_pairs(&g);
    let combined: Vec<_> = pairs.iter().map(|p| p.combined_weight).collect();
    assert_eq!(combined, vec![5, 5, 11, 12, 17]);
    assert_eq!(considered_edges(&pairs, 3), vec![2, 9, 4, 7, 5, 6]);
}

#[test]
fn test_narrow_candidates_may_miss_every_tree() {
    let g = load_graph("test05_narrow_candidates.uwg");

    let mut narrow = PairedCandidateSolver::new();
    assert_eq!(narrow.solve(&g, capped(1_000)), Solution::NotFound);
    assert_eq!(narrow.statistics().get(Counters::Candidates), 4);
    assert_eq!(narrow.statistics().get(Counters::SpanningCandidates), 0);

    let mut wide = PairedCandidateSolver::new().with_width(CandidateWidth::All);
    assert_eq!(
        wide.solve(&g, capped(1_000)),
        Solution::Found(SpanningTree {
            edges: vec![1, 3, 4],
            bottleneck: 11
        })
    );
}

#[test]
fn test_paired_solver_stops_at_iteration_cap() {
    let g = load_graph("test04.uwg");
    let mut solver = PairedCandidateSolver::new().with_width(CandidateWidth::All);
    let _ = solver.solve(&g, capped(10));
    assert_eq!(solver.statistics().get(Counters::Candidates), 10);
}

#[test]
fn test_longer_random_runs_never_worse() {
    let g = load_graph("test04.uwg");
    let mut previous: Option<i64> = None;
    for iterations in [1, 5, 25, 125, 625] {
        let solution = RandomizedSolver::seeded(99).solve(&g, capped(iterations));
        let current = solution.bottleneck();
        if let (Some(before), Some(now)) = (previous, current) {
            assert!(now <= before, "{} draws gave {} after {}", iterations, now, before);
        }
        if previous.is_some() {
            assert!(current.is_some(), "a longer run lost its tree");
        }
        previous = current.or(previous);
    }
}

#[test]
fn test_randomized_statistics_count_every_draw() {
    let g = load_graph("test02.uwg");
    let mut solver = RandomizedSolver::seeded(5);
    let _ = solver.solve(&g, capped(200));
    assert_eq!(solver.statistics().get(Counters::Candidates), 200);
    assert!(
        solver.statistics().get(Counters::SpanningCandidates)
            >= solver.statistics().get(Counters::Improvements)
    );
}
