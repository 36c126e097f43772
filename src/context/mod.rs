// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context.
//!
//! A [`SearchContext`] holds everything one solve mutates: the trail of the
//! partial combination, the running deadline, the best tree so far and the
//! counters. The graph itself is borrowed read-only, so independent contexts
//! can search the same graph side by side.

pub mod deadline;

pub use deadline::{Budget, Deadline, DEFAULT_TIME_BUDGET};

use crate::graph::Graph;
use crate::solver::{Solution, SpanningTree};
use crate::state::statistics::{Counters, Statistics};
use crate::trail::Trail;
use tracing::debug;

/// Mutable state of a single search over a borrowed graph.
#[derive(Debug)]
pub struct SearchContext<'g> {
    pub graph: &'g Graph,

    /// Edge indices (1-based) the enumeration chooses from.
    pub candidates: Vec<usize>,

    /// Positions into `candidates` chosen so far.
    pub trail: Trail,

    pub deadline: Deadline,

    pub statistics: Statistics,

    best: Option<SpanningTree>,
}

impl<'g> SearchContext<'g> {
    pub fn new(graph: &'g Graph, deadline: Deadline) -> Self {
        Self {
            graph,
            candidates: Vec::new(),
            trail: Trail::new(),
            deadline,
            statistics: Statistics::new(),
            best: None,
        }
    }

    /// Set the candidate pool for enumeration.
    pub fn with_candidates(mut self, candidates: Vec<usize>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Edge indices currently chosen on the trail, in choice order.
    pub fn chosen_edges(&self) -> Vec<usize> {
        self.trail
            .positions()
            .iter()
            .map(|&position| self.candidates[position])
            .collect()
    }

    /// Score a candidate subset and keep it if it is a spanning tree strictly
    /// better than the best so far. Returns whether it was kept.
    pub fn consider(&mut self, edges: Vec<usize>) -> bool {
        self.statistics.increment(Counters::Candidates);
        if !self.graph.spans_tree(&edges, false) {
            return false;
        }
        self.statistics.increment(Counters::SpanningCandidates);

        let bottleneck = self.graph.bottleneck(&edges);
        if self
            .best
            .as_ref()
            .is_some_and(|best| best.bottleneck <= bottleneck)
        {
            return false;
        }

        self.statistics.increment(Counters::Improvements);
        debug!(?edges, bottleneck, "improved spanning tree");
        self.best = Some(SpanningTree { edges, bottleneck });
        true
    }

    pub fn best(&self) -> Option<&SpanningTree> {
        self.best.as_ref()
    }

    /// The best tree found, or [`Solution::NotFound`].
    pub fn into_solution(self) -> Solution {
        match self.best {
            Some(tree) => Solution::Found(tree),
            None => Solution::NotFound,
        }
    }
}
