// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `combination`: CombinationPredicate, picks one combination of candidates per success
//! - `evaluate`: EvaluatePredicate, scores the picked combination under the deadline
//! - Built-in predicate: `FailPredicate`

pub mod combination;
pub mod evaluate;

pub use combination::CombinationPredicate;
pub use evaluate::EvaluatePredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing backtracking. As the terminal predicate it makes
/// the engine explore every alternative of the predicates before it.
///
/// # Example
///
/// ```
/// use mfmst_search::context::{Budget, SearchContext};
/// use mfmst_search::engine::EngineBuilder;
/// use mfmst_search::graph::Graph;
/// use mfmst_search::predicates::{CombinationPredicate, FailPredicate};
///
/// let graph = Graph::new(3);
/// let mut ctx = SearchContext::new(&graph, Budget::default().start())
///     .with_candidates(vec![1, 2, 3, 4]);
/// let engine = EngineBuilder::new()
///     .add(Box::new(CombinationPredicate::new(2)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all combinations then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none());
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}
