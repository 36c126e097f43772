// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for spanning trees that minimise a mirrored bottleneck objective.
//!
//! Edges keep their input order, and each position `i` out of `m` is paired
//! with its mirror `m + 1 - i`. For a spanning tree `T` the objective is
//!
//! ```text
//! max( sum of w(i) for i in T , sum of w(m + 1 - i) for i in T )
//! ```
//!
//! and the solvers look for a tree that makes it small.
//!
//! # Architecture
//!
//! - [`graph`]: edges, adjacency, connectivity and the objective
//! - [`solver`]: the two time-boxed strategies and the [`Solution`] type
//! - [`engine`], [`predicates`], [`trail`]: backtracking enumeration used by
//!   the paired-candidate solver
//! - [`context`]: per-search state and time budgets
//! - [`io`], [`config`]: text format and environment configuration for the
//!   `mfmst` binary
//!
//! # Example
//!
//! ```
//! use mfmst_search::{build_graph, solve, Budget, Solution};
//!
//! let graph = build_graph(3, [(1, 2, 1), (2, 3, 2), (1, 3, 3)]).unwrap();
//! let solution = solve(&graph, Budget::default());
//! assert_eq!(solution.bottleneck(), Some(4));
//!
//! let split = build_graph(3, [(1, 2, 1)]).unwrap();
//! assert_eq!(solve(&split, Budget::default()), Solution::NoSpanningTree);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod graph;
pub mod io;
pub mod predicates;
pub mod solver;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::{Budget, SearchContext};
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use graph::{build_graph, Edge, Graph, GraphError, Weight, WeightSums};
pub use solver::{solve, Solution, Solver, SpanningTree};
pub use trail::Trail;
