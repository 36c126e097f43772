// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Enumerates combinations through CombinationPredicate rounds
//! - Backtracks on failure and restores the trail
//! - Suspends when the evaluation budget runs out
//! - Reports try/retry statistics

mod common;

use common::load_graph;
use mfmst_search::context::{Budget, SearchContext};
use mfmst_search::engine::EngineBuilder;
use mfmst_search::predicates::{CombinationPredicate, EvaluatePredicate, FailPredicate};
use mfmst_search::state::statistics::Counters;

#[test]
fn test_fail_terminal_exhausts_search() {
    let g = load_graph("test01.uwg");
    let mut ctx = SearchContext::new(&g, Budget::default().start()).with_candidates(vec![1, 2, 3]);
    let engine = EngineBuilder::new()
        .add(Box::new(CombinationPredicate::new(2)))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert!(ctx.trail.is_empty());
    assert!(ctx.best().is_none());
}

#[test]
fn test_evaluation_visits_every_combination() {
    let g = load_graph("test02.uwg");
    let mut ctx =
        SearchContext::new(&g, Budget::default().start()).with_candidates((1..=8).collect());
    let engine = EngineBuilder::new()
        .add(Box::new(CombinationPredicate::new(g.tree_size())))
        .terminal(Box::new(EvaluatePredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::Candidates), 70);
    assert_eq!(ctx.best().map(|t| t.bottleneck), Some(16));
    assert_eq!(ctx.best().map(|t| t.edges.clone()), Some(vec![2, 3, 6, 7]));
}

#[test]
fn test_suspended_engine_reports_statistics() {
    let g = load_graph("test01.uwg");
    let budget = Budget::default().with_max_iterations(2);
    let mut ctx = SearchContext::new(&g, budget.start()).with_candidates(vec![1, 2, 3]);
    let engine = EngineBuilder::new()
        .add(Box::new(CombinationPredicate::new(2)))
        .terminal(Box::new(EvaluatePredicate))
        .build();

    let engine = engine.search(&mut ctx).expect("budget suspends the search");
    let (tries, retries) = engine.statistics();
    // Combinations [1,2], [1,3] evaluated; [2,3] suspends.
    assert_eq!(ctx.statistics.get(Counters::Candidates), 2);
    assert_eq!(tries, 6);
    assert_eq!(retries, 5);
    assert_eq!(ctx.chosen_edges(), vec![2, 3]);
}
