// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Spanning-tree solvers for the mirrored bottleneck objective.
//!
//! Two time-boxed strategies share the same contract:
//!
//! - [`RandomizedSolver`]: draws random `V - 1` subsets until the budget runs out
//! - [`PairedCandidateSolver`]: ranks mirror pairs by combined weight and
//!   enumerates combinations of the cheapest edge positions
//!
//! A disconnected graph short-circuits both to [`Solution::NoSpanningTree`]
//! before any search starts, whatever the budget.

pub mod paired;
pub mod random;

pub use paired::{considered_edges, ordered_edge_pairs, CandidateWidth, EdgePair, PairedCandidateSolver};
pub use random::RandomizedSolver;

use crate::context::Budget;
use crate::graph::{Graph, Weight};
use crate::state::statistics::Statistics;
use std::fmt;
use std::str::FromStr;

/// A spanning tree and its bottleneck value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// 1-based edge indices, in the order the solver found them.
    pub edges: Vec<usize>,
    pub bottleneck: Weight,
}

/// Outcome of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// The graph is disconnected, so no spanning tree exists.
    NoSpanningTree,
    /// Best tree found within the budget.
    Found(SpanningTree),
    /// The graph is connected but the search found no tree within its budget
    /// or candidate set.
    NotFound,
}

impl Solution {
    pub fn tree(&self) -> Option<&SpanningTree> {
        match self {
            Solution::Found(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn bottleneck(&self) -> Option<Weight> {
        self.tree().map(|tree| tree.bottleneck)
    }
}

/// A time-boxed search strategy.
pub trait Solver {
    /// Search `graph` for a low-bottleneck spanning tree within `budget`.
    fn solve(&mut self, graph: &Graph, budget: Budget) -> Solution;

    /// Counters from the most recent solve.
    fn statistics(&self) -> &Statistics;

    fn name(&self) -> &str;
}

/// Which strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverKind {
    #[default]
    Paired,
    Randomized,
}

impl SolverKind {
    /// Build the solver. `seed` only affects the randomized solver; without
    /// one it seeds from entropy.
    pub fn build(self, seed: Option<u64>, width: CandidateWidth) -> Box<dyn Solver> {
        match self {
            SolverKind::Paired => Box::new(PairedCandidateSolver::new().with_width(width)),
            SolverKind::Randomized => Box::new(match seed {
                Some(seed) => RandomizedSolver::seeded(seed),
                None => RandomizedSolver::from_entropy(),
            }),
        }
    }
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paired" => Ok(SolverKind::Paired),
            "random" | "randomized" => Ok(SolverKind::Randomized),
            other => Err(format!("unknown solver '{}' (expected 'paired' or 'random')", other)),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Paired => write!(f, "paired"),
            SolverKind::Randomized => write!(f, "random"),
        }
    }
}

/// Solve with the paired-candidate solver at its default width.
pub fn solve(graph: &Graph, budget: Budget) -> Solution {
    PairedCandidateSolver::new().solve(graph, budget)
}
