// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scores the combination on the trail.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Terminal predicate of the exhaustive search.
///
/// Suspends the engine once the deadline has passed. Otherwise it offers the
/// chosen edges to the context and fails, so the engine moves on to the next
/// combination.
#[derive(Debug)]
pub struct EvaluatePredicate;

impl Predicate for EvaluatePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        if ctx.deadline.exhausted() {
            return PredicateResult::Suspend;
        }
        let edges = ctx.chosen_edges();
        ctx.consider(edges);
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Evaluate"
    }
}

impl TerminalPredicate for EvaluatePredicate {}
