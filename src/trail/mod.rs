// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the enumeration engine.
//!
//! The trail is the partial combination under construction: a stack of
//! positions into the considered-edge list, in the order they were chosen.
//! The engine records the trail length as a checkpoint on every stack entry
//! and rewinds to it before retrying, so predicates never undo their own
//! choices.

/// Stack of chosen candidate positions.
#[derive(Debug, Default)]
pub struct Trail {
    positions: Vec<usize>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly chosen position.
    pub fn push(&mut self, position: usize) {
        self.positions.push(position);
    }

    /// Current trail length, usable as a checkpoint.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The most recently chosen position.
    pub fn last(&self) -> Option<usize> {
        self.positions.last().copied()
    }

    /// Undo every choice made after `checkpoint`.
    ///
    /// # Panics
    ///
    /// Panics if `checkpoint` is beyond the current trail length.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        assert!(
            checkpoint <= self.positions.len(),
            "Cannot rewind to future checkpoint {} (trail length {})",
            checkpoint,
            self.positions.len()
        );
        self.positions.truncate(checkpoint);
    }

    /// Chosen positions, oldest first.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}
