// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Time budgets.
//!
//! Both solvers are time-boxed. The deadline is fixed once at solver entry
//! and polled before each unit of work; nothing is scheduled or interrupted.

use std::time::{Duration, Instant};

/// Default wall-clock budget for one solve.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(900);

/// How long a solver may search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub time: Duration,
    /// Optional cap on units of work (samples or combinations).
    pub max_iterations: Option<u64>,
}

impl Default for Budget {
    fn default() -> Self {
        Self::time(DEFAULT_TIME_BUDGET)
    }
}

impl Budget {
    /// A purely wall-clock budget.
    pub fn time(time: Duration) -> Self {
        Self {
            time,
            max_iterations: None,
        }
    }

    /// Also stop after `max_iterations` units of work.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Start the clock.
    pub fn start(self) -> Deadline {
        Deadline {
            started: Instant::now(),
            budget: self,
            iterations: 0,
        }
    }
}

/// A running budget.
#[derive(Debug, Clone)]
pub struct Deadline {
    started: Instant,
    budget: Budget,
    iterations: u64,
}

impl Deadline {
    /// True once the budget is spent; otherwise counts one more iteration
    /// against it.
    pub fn exhausted(&mut self) -> bool {
        if self.started.elapsed() >= self.budget.time {
            return true;
        }
        if let Some(max) = self.budget.max_iterations {
            if self.iterations >= max {
                return true;
            }
        }
        self.iterations += 1;
        false
    }

    /// Units of work started so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
