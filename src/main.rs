// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reads a `.uwg` graph on stdin and prints the best spanning tree found.
//!
//! ```text
//! mfmst < test01.uwg
//! ```
//!
//! Configuration comes from the environment (see `mfmst_search::config`);
//! logs go to stderr and are controlled by `RUST_LOG`.

use anyhow::{bail, Context, Result};
use mfmst_search::config::SolverConfig;
use mfmst_search::io::{read_graph, write_solution};
use mfmst_search::Solution;
use std::io::{self, BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = SolverConfig::from_env().context("invalid configuration")?;
    let graph = read_graph(io::stdin().lock()).context("failed to parse graph from stdin")?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        solver = %config.solver,
        budget_ms = config.time_budget.as_millis() as u64,
        "graph loaded"
    );

    let mut solver = config.build_solver();
    let solution = solver.solve(&graph, config.budget());
    if solution == Solution::NotFound {
        bail!(
            "no spanning tree found within {} ms by the {} solver",
            config.time_budget.as_millis(),
            solver.name()
        );
    }

    let mut out = BufWriter::new(io::stdout().lock());
    write_solution(&mut out, &solution).context("failed to write result")?;
    out.flush().context("failed to write result")?;
    Ok(())
}
