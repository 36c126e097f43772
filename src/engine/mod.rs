// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search engine.
//!
//! This module implements a backtracking engine that runs predicates
//! in sequence. The engine coordinates with the trail so that state is
//! restored automatically on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use mfmst_search::context::{Budget, SearchContext};
//! use mfmst_search::engine::EngineBuilder;
//! use mfmst_search::graph::build_graph;
//! use mfmst_search::predicates::{CombinationPredicate, FailPredicate};
//!
//! let graph = build_graph(3, [(1, 2, 1), (2, 3, 2), (1, 3, 3)]).unwrap();
//! let mut ctx = SearchContext::new(&graph, Budget::default().start())
//!     .with_candidates(vec![1, 2, 3]);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(CombinationPredicate::new(2)))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // Every combination fails, so the search is exhausted.
//! assert!(engine.search(&mut ctx).is_none());
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if a predicate suspended the search
    /// - `None` if the search space is exhausted
    ///
    /// Results are reported through side effects on `ctx`, not through the
    /// return value.
    ///
    /// # Panics
    ///
    /// Panics if the last predicate returns Success, or if retry_pred returns
    /// Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext<'_>) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None;
        }

        self.stack.push(StackEntry::new(0, 0, ctx.trail.len()));

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Backtracked past the first predicate
            };

            ctx.trail.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                    }
                    PredicateResult::Suspend => return Some(self),
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self, ctx: &SearchContext<'_>) {
        let next_index = self.current_entry().predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 Every program must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext<'_>) {
        let current = self.current_entry();
        let entry = StackEntry::new(current.predicate_index, current.round + 1, ctx.trail.len());
        self.stack.push(entry);
    }

    fn current_entry(&self) -> &StackEntry {
        self.stack
            .last()
            .expect("engine stack is non-empty while a predicate is running")
    }

    /// Returns (try_count, retry_count) for the last search.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder assembling a predicate program.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, closing the program.
    pub fn terminal<P: TerminalPredicate + 'static>(mut self, predicate: Box<P>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A predicate program that ends in a terminal predicate.
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
