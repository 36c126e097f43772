// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph model: edges in input order plus per-vertex adjacency.
//!
//! The edge list order is significant. Edge index `i` (1-based) is the
//! canonical name of the `i`-th input edge, and the objective pairs position
//! `i` with its mirror `m + 1 - i` (see [`objective`]).
//!
//! Adjacency lists hold positions into the edge list rather than copies, so
//! every edge appears in exactly two lists (or twice in one, for a loop).
//!
//! A [`Graph`] is never mutated once a solver has it. Subset checks such as
//! [`Graph::spans_tree`] build a fresh, short-lived graph from the referenced
//! edges.

pub mod edge;
pub mod objective;

pub use edge::{Edge, Weight};
pub use objective::WeightSums;

use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised when building a graph from external (1-based) input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("endpoint {endpoint} of edge {edge} is outside 1..={vertex_count}")]
    EndpointOutOfRange {
        edge: usize,
        endpoint: usize,
        vertex_count: usize,
    },
}

/// Undirected weighted graph with a fixed vertex count.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Build a graph from 1-based `(u, v, weight)` triples, keeping their order.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v, weight) in edges {
            graph.new_edge_from_fields(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Append an edge given 1-based endpoints, as they appear in input files.
    pub fn new_edge_from_fields(
        &mut self,
        u: usize,
        v: usize,
        weight: Weight,
    ) -> Result<(), GraphError> {
        let edge_number = self.edges.len() + 1;
        for endpoint in [u, v] {
            if endpoint == 0 || endpoint > self.vertex_count {
                return Err(GraphError::EndpointOutOfRange {
                    edge: edge_number,
                    endpoint,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.insert_existing_edge(Edge::new(u - 1, v - 1, weight));
        Ok(())
    }

    /// Append an already constructed edge (0-based endpoints).
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn insert_existing_edge(&mut self, edge: Edge) {
        let position = self.edges.len();
        self.edges.push(edge);
        self.adjacency[edge.from()].push(position);
        self.adjacency[edge.to()].push(position);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges in a spanning tree of this graph (`V - 1`).
    pub fn tree_size(&self) -> usize {
        self.vertex_count.saturating_sub(1)
    }

    /// All edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge with 1-based index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `1..=edge_count()`.
    pub fn edge(&self, index: usize) -> &Edge {
        match index.checked_sub(1).and_then(|i| self.edges.get(i)) {
            Some(edge) => edge,
            None => panic!(
                "edge index {} out of range 1..={}",
                index,
                self.edges.len()
            ),
        }
    }

    /// Edges incident to `vertex`, in insertion order.
    pub fn adjacent(&self, vertex: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency[vertex].iter().map(|&i| &self.edges[i])
    }

    /// Whether every vertex is reachable from vertex 0.
    pub fn is_connected(&self) -> bool {
        self.vertex_count == 0 || self.is_connected_from(0)
    }

    /// Breadth-first reachability from `start`, stopping as soon as all
    /// vertices have been seen.
    pub fn is_connected_from(&self, start: usize) -> bool {
        let mut visited = vec![false; self.vertex_count];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        let mut seen = 1;
        if seen == self.vertex_count {
            return true;
        }

        while let Some(vertex) = queue.pop_front() {
            for edge in self.adjacent(vertex) {
                let next = edge.other(vertex);
                if !visited[next] {
                    visited[next] = true;
                    seen += 1;
                    if seen == self.vertex_count {
                        return true;
                    }
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Whether the edges named by `edge_indices` (1-based) connect all vertices.
    ///
    /// Fewer than `V - 1` indices is always `false`. With `cut_to_tree_size`,
    /// only the first `V - 1` indices are used and the rest are ignored.
    /// This tests spanning, not acyclicity: callers wanting a tree must pass
    /// exactly `V - 1` indices.
    ///
    /// # Panics
    ///
    /// Panics if there are more indices than edges in the graph, or if any
    /// index is out of range.
    pub fn spans_tree(&self, edge_indices: &[usize], cut_to_tree_size: bool) -> bool {
        let tree_size = self.tree_size();
        if edge_indices.len() < tree_size {
            return false;
        }
        assert!(
            edge_indices.len() <= self.edges.len(),
            "{} edge indices given but the graph has only {} edges",
            edge_indices.len(),
            self.edges.len()
        );

        let edge_indices = if cut_to_tree_size {
            &edge_indices[..tree_size]
        } else {
            edge_indices
        };

        let mut subgraph = Graph::new(self.vertex_count);
        for &index in edge_indices {
            subgraph.insert_existing_edge(*self.edge(index));
        }
        subgraph.is_connected()
    }
}

/// Build a graph from 1-based `(u, v, weight)` triples.
pub fn build_graph<I>(vertex_count: usize, edges: I) -> Result<Graph, GraphError>
where
    I: IntoIterator<Item = (usize, usize, Weight)>,
{
    Graph::from_edges(vertex_count, edges)
}
