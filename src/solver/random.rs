// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Monte Carlo search.
//!
//! Draws subsets of `V - 1` distinct edge indices uniformly at random until
//! the budget is spent, keeping the best spanning tree seen. The number of
//! draws depends on the wall clock, so results vary between runs unless the
//! budget also caps iterations.

use super::{Solution, Solver};
use crate::context::{Budget, SearchContext};
use crate::graph::Graph;
use crate::state::statistics::Statistics;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Randomized solver owning its random number stream.
#[derive(Debug)]
pub struct RandomizedSolver {
    rng: StdRng,
    statistics: Statistics,
}

impl RandomizedSolver {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            statistics: Statistics::new(),
        }
    }

    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Draw `V - 1` distinct 1-based edge indices, rejecting repeats.
    ///
    /// # Panics
    ///
    /// Panics if the graph has fewer than `V - 1` edges.
    pub fn generate_random_edges(&mut self, graph: &Graph) -> Vec<usize> {
        let size = graph.tree_size();
        let edge_count = graph.edge_count();
        assert!(
            size <= edge_count,
            "cannot draw {} distinct edges from {}",
            size,
            edge_count
        );

        let mut drawn = vec![false; edge_count + 1];
        let mut edges = Vec::with_capacity(size);
        while edges.len() < size {
            let index = self.rng.gen_range(1..=edge_count);
            if !drawn[index] {
                drawn[index] = true;
                edges.push(index);
            }
        }
        edges
    }
}

impl Solver for RandomizedSolver {
    fn solve(&mut self, graph: &Graph, budget: Budget) -> Solution {
        if !graph.is_connected() {
            return Solution::NoSpanningTree;
        }

        let mut ctx = SearchContext::new(graph, budget.start());
        while !ctx.deadline.exhausted() {
            let edges = self.generate_random_edges(graph);
            ctx.consider(edges);
        }

        info!(
            solver = self.name(),
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
        "random"
    }
}
