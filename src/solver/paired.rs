// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Paired-candidate exhaustive search.
//!
//! Edge position `i` and its mirror `m + 1 - i` always contribute to opposite
//! sums of the objective, so the solver ranks the `ceil(m / 2)` mirror pairs
//! by combined weight and restricts the search to the edges of the cheapest
//! pairs. All `V - 1` combinations of that pool are then enumerated in
//! lexicographic order by the backtracking engine, until the pool is
//! exhausted or the deadline passes.
//!
//! The pool is a greedy pruning: the true optimum may use an edge outside it.

use super::{Solution, Solver};
use crate::context::{Budget, SearchContext};
use crate::engine::EngineBuilder;
use crate::graph::{Graph, Weight};
use crate::predicates::{CombinationPredicate, EvaluatePredicate};
use crate::state::statistics::Statistics;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// An edge position, its mirror and their combined weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePair {
    pub first: usize,
    pub mirror: usize,
    pub combined_weight: Weight,
}

/// How many mirror pairs feed the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateWidth {
    /// `ceil((V - 1) / 2)` pairs, just enough to hold one tree.
    #[default]
    Minimal,
    /// An explicit number of pairs.
    Pairs(usize),
    /// Every pair, so the search covers all edges.
    All,
}

impl CandidateWidth {
    /// Number of pairs to take for `graph`.
    pub fn pairs_to_take(self, graph: &Graph) -> usize {
        match self {
            CandidateWidth::Minimal => graph.tree_size().div_ceil(2),
            CandidateWidth::Pairs(n) => n,
            CandidateWidth::All => graph.edge_count().div_ceil(2),
        }
    }
}

impl FromStr for CandidateWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" | "min" => Ok(CandidateWidth::Minimal),
            "all" => Ok(CandidateWidth::All),
            other => other.parse().map(CandidateWidth::Pairs).map_err(|_| {
                format!(
                    "invalid candidate width '{}' (expected 'minimal', 'all' or a pair count)",
                    other
                )
            }),
        }
    }
}

impl fmt::Display for CandidateWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateWidth::Minimal => write!(f, "minimal"),
            CandidateWidth::Pairs(n) => write!(f, "{}", n),
            CandidateWidth::All => write!(f, "all"),
        }
    }
}

/// Pair each position `i` in `1..=ceil(m/2)` with its mirror, sorted by
/// combined weight (stable for ties). With odd `m` the middle edge pairs
/// with itself.
pub fn ordered_edge_pairs(graph: &Graph) -> Vec<EdgePair> {
    let edge_count = graph.edge_count();
    let mut pairs: Vec<EdgePair> = (1..=edge_count.div_ceil(2))
        .map(|first| {
            let mirror = graph.mirror_index(first);
            EdgePair {
                first,
                mirror,
                combined_weight: graph.edge(first).weight() + graph.edge(mirror).weight(),
            }
        })
        .collect();
    pairs.sort_by_key(|pair| pair.combined_weight);
    pairs
}

/// Edge indices of the first `pairs_to_take` pairs, in pair order, with the
/// self-paired middle edge listed once.
pub fn considered_edges(pairs: &[EdgePair], pairs_to_take: usize) -> Vec<usize> {
    let mut considered = Vec::with_capacity(2 * pairs_to_take.min(pairs.len()));
    for pair in pairs.iter().take(pairs_to_take) {
        considered.push(pair.first);
        if !considered.contains(&pair.mirror) {
            considered.push(pair.mirror);
        }
    }
    considered
}

/// Deterministic exhaustive search over the cheapest mirror pairs.
#[derive(Debug, Default)]
pub struct PairedCandidateSolver {
    width: CandidateWidth,
    statistics: Statistics,
}

impl PairedCandidateSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: CandidateWidth) -> Self {
        self.width = width;
        self
    }

    pub fn width(&self) -> CandidateWidth {
        self.width
    }
}

impl Solver for PairedCandidateSolver {
    fn solve(&mut self, graph: &Graph, budget: Budget) -> Solution {
        if !graph.is_connected() {
            return Solution::NoSpanningTree;
        }

        let deadline = budget.start();
        let pairs = ordered_edge_pairs(graph);
        let candidates = considered_edges(&pairs, self.width.pairs_to_take(graph));
        debug!(?candidates, width = %self.width, "considered edges");

        let mut ctx = SearchContext::new(graph, deadline).with_candidates(candidates);
        let engine = EngineBuilder::new()
            .add(Box::new(CombinationPredicate::new(graph.tree_size())))
            .terminal(Box::new(EvaluatePredicate))
            .build();
        let timed_out = engine.search(&mut ctx).is_some();

        info!(
            solver = self.name(),
            timed_out,
            elapsed_ms = ctx.deadline.elapsed().as_millis() as u64,
            statistics = %ctx.statistics,
            "search finished"
        );
        self.statistics = ctx.statistics.clone();
        ctx.into_solution()
    }

    fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn name(&self) -> &str {
        "paired"
    }
}
