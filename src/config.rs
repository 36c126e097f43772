// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration from the environment.
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `MFMST_SOLVER` | `paired`, `random` | `paired` |
//! | `MFMST_TIME_BUDGET_MS` | milliseconds | `900` |
//! | `MFMST_SEED` | u64 | from entropy |
//! | `MFMST_CANDIDATE_PAIRS` | `minimal`, `all`, pair count | `minimal` |

use crate::context::{Budget, DEFAULT_TIME_BUDGET};
use crate::solver::{CandidateWidth, Solver, SolverKind};
use std::time::Duration;
use thiserror::Error;

pub const SOLVER_VAR: &str = "MFMST_SOLVER";
pub const TIME_BUDGET_VAR: &str = "MFMST_TIME_BUDGET_MS";
pub const SEED_VAR: &str = "MFMST_SEED";
pub const CANDIDATE_PAIRS_VAR: &str = "MFMST_CANDIDATE_PAIRS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}={value}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub solver: SolverKind,
    pub time_budget: Duration,
    pub seed: Option<u64>,
    pub candidate_width: CandidateWidth,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            solver: SolverKind::default(),
            time_budget: DEFAULT_TIME_BUDGET,
            seed: None,
            candidate_width: CandidateWidth::default(),
        }
    }
}

impl SolverConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, unset variables keeping
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            solver: parse_var(&lookup, SOLVER_VAR)?.unwrap_or(defaults.solver),
            time_budget: parse_var::<u64, _>(&lookup, TIME_BUDGET_VAR)?
                .map(Duration::from_millis)
                .unwrap_or(defaults.time_budget),
            seed: parse_var(&lookup, SEED_VAR)?,
            candidate_width: parse_var(&lookup, CANDIDATE_PAIRS_VAR)?
                .unwrap_or(defaults.candidate_width),
        })
    }

    pub fn budget(&self) -> Budget {
        Budget::time(self.time_budget)
    }

    pub fn build_solver(&self) -> Box<dyn Solver> {
        self.solver.build(self.seed, self.candidate_width)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => Err(ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            }),
        },
    }
}
