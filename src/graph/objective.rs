// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mirrored weight sums.
//!
//! Every edge position `i` (1-based, out of `m`) is paired with its mirror
//! position `m + 1 - i`. For a subset of positions the objective keeps two
//! running sums: the weights at the chosen positions, and the weights at their
//! mirrors. The bottleneck value of the subset is the larger of the two.

use super::{Graph, Weight};

/// The unmirrored and mirrored weight sums of an edge subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeightSums {
    pub unmirrored: Weight,
    pub mirrored: Weight,
}

impl WeightSums {
    pub fn new(unmirrored: Weight, mirrored: Weight) -> Self {
        Self {
            unmirrored,
            mirrored,
        }
    }

    /// The quantity both solvers minimise.
    pub fn bottleneck(&self) -> Weight {
        self.unmirrored.max(self.mirrored)
    }
}

impl From<WeightSums> for (Weight, Weight) {
    fn from(sums: WeightSums) -> Self {
        (sums.unmirrored, sums.mirrored)
    }
}

impl Graph {
    /// 1-based position of the mirror of edge `index`.
    pub fn mirror_index(&self, index: usize) -> usize {
        self.edge_count() + 1 - index
    }

    /// Sum the weights at `edge_indices` and at their mirror positions.
    ///
    /// With `cut_to_tree_size`, only the first `V - 1` indices count.
    /// Index order does not affect the result.
    ///
    /// # Panics
    ///
    /// Panics if an index is outside `1..=edge_count()`, or if a sum
    /// overflows [`Weight`].
    pub fn weight_sum_tuple(&self, edge_indices: &[usize], cut_to_tree_size: bool) -> WeightSums {
        let edge_indices = if cut_to_tree_size {
            &edge_indices[..edge_indices.len().min(self.tree_size())]
        } else {
            edge_indices
        };

        edge_indices
            .iter()
            .fold(WeightSums::default(), |sums, &index| WeightSums {
                unmirrored: add_weight(sums.unmirrored, self.edge(index).weight()),
                mirrored: add_weight(sums.mirrored, self.edge(self.mirror_index(index)).weight()),
            })
    }

    /// Shorthand for the bottleneck value of `edge_indices`.
    pub fn bottleneck(&self, edge_indices: &[usize]) -> Weight {
        self.weight_sum_tuple(edge_indices, false).bottleneck()
    }
}

fn add_weight(sum: Weight, weight: Weight) -> Weight {
    sum.checked_add(weight)
        .unwrap_or_else(|| panic!("weight sum overflow adding {} to {}", weight, sum))
}
