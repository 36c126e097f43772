// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for backtracking search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a choice point in the search space. Predicates can succeed,
//! fail, offer a number of alternatives, or suspend the search.
//!
//! # Example
//!
//! ```
//! use mfmst_search::engine::{Predicate, PredicateResult};
//! use mfmst_search::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct TwoWays;
//!
//! impl Predicate for TwoWays {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize, choice: usize) -> PredicateResult {
//!         if choice < 2 {
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Failure
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "TwoWays"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Lets one predicate pick several items in turn.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A predicate that can end a program.
///
/// Terminal predicates fail or suspend; they never return Success. The
/// engine builder only accepts a terminal predicate as the last step.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the backtracking engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for each choice until one succeeds
///
/// The trail is rewound to the entry's checkpoint before every call, so a
/// predicate sees only the choices made by the predicates before it.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// retry_pred cannot return Choices or Suspend.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for debugging. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
