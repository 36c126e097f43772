// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weighted undirected edges.
//!
//! Endpoints are stored 0-based in the order they were given. Equality is
//! structural, so `(a, b, w)` and `(b, a, w)` compare unequal even though
//! traversal via [`Edge::other`] treats both endpoints alike.

use std::fmt;

/// Integer edge weight.
pub type Weight = i64;

/// An immutable weighted edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: usize,
    to: usize,
    weight: Weight,
}

impl Edge {
    /// Create an edge from 0-based endpoints.
    pub fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The endpoint opposite `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not one of this edge's endpoints.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.from {
            self.to
        } else if vertex == self.to {
            self.from
        } else {
            panic!("vertex {} is not an endpoint of edge {}", vertex, self);
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} (weight {})", self.from, self.to, self.weight)
    }
}
