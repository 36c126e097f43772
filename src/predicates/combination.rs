// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lexicographic enumeration of fixed-size combinations.
//!
//! Round `r` chooses the `r`-th element of the combination. Its choices are
//! the candidate positions strictly after the previous pick that still leave
//! room for the picks to come, tried in increasing order. Together with
//! backtracking this visits every `k`-subset of the candidates exactly once,
//! in lexicographic order of positions.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Picks `size` distinct candidates, one per round.
#[derive(Debug)]
pub struct CombinationPredicate {
    size: usize,
}

impl CombinationPredicate {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// First position available to the current round.
    fn first_open(ctx: &SearchContext<'_>) -> usize {
        ctx.trail.last().map_or(0, |position| position + 1)
    }
}

impl Predicate for CombinationPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, round: usize) -> PredicateResult {
        if self.size == 0 {
            // A single choice, so backtracking past it ends the search.
            return PredicateResult::Choices(1);
        }

        let still_needed = self.size - round;
        let first = Self::first_open(ctx);
        match ctx.candidates.len().checked_sub(first + still_needed) {
            Some(slack) => PredicateResult::Choices(slack + 1),
            None => PredicateResult::Failure,
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        if self.size == 0 {
            return PredicateResult::Success;
        }
        let position = Self::first_open(ctx) + choice;
        ctx.trail.push(position);
        if round + 1 < self.size {
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Success
        }
    }

    fn name(&self) -> &str {
        "Combination"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Budget;
    use crate::engine::{EngineBuilder, TerminalPredicate};
    use crate::graph::Graph;

    /// Records every complete combination, then fails to ask for the next.
    #[derive(Debug, Default)]
    struct Collect(std::rc::Rc<std::cell::RefCell<Vec<Vec<usize>>>>);

    impl Predicate for Collect {
        fn try_pred(&mut self, ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
            self.0.borrow_mut().push(ctx.chosen_edges());
            PredicateResult::Failure
        }
    }

    impl TerminalPredicate for Collect {}

    fn combinations(candidates: Vec<usize>, size: usize) -> Vec<Vec<usize>> {
        let graph = Graph::new(1);
        let mut ctx = SearchContext::new(&graph, Budget::default().start()).with_candidates(candidates);
        let seen = Collect::default();
        let sink = seen.0.clone();
        let engine = EngineBuilder::new()
            .add(Box::new(CombinationPredicate::new(size)))
            .terminal(Box::new(seen))
            .build();
        assert!(engine.search(&mut ctx).is_none());
        sink.take()
    }

    #[test]
    fn test_lexicographic_order() {
        assert_eq!(
            combinations(vec![7, 3, 5, 1], 2),
            vec![
                vec![7, 3],
                vec![7, 5],
                vec![7, 1],
                vec![3, 5],
                vec![3, 1],
                vec![5, 1]
            ]
        );
    }

    #[test]
    fn test_full_and_empty_sizes() {
        assert_eq!(combinations(vec![1, 2, 3], 3), vec![vec![1, 2, 3]]);
        assert_eq!(combinations(vec![1, 2, 3], 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_empty_combination_offered_once() {
        assert_eq!(combinations(Vec::new(), 0), vec![Vec::<usize>::new()]);
        assert_eq!(combinations((1..=5).collect(), 0).len(), 1);
    }

    #[test]
    fn test_too_few_candidates() {
        assert!(combinations(vec![1, 2], 3).is_empty());
    }

    #[test]
    fn test_combination_count() {
        assert_eq!(combinations((1..=7).collect(), 3).len(), 35);
    }
}
