// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text format adapter.
//!
//! Input (`.uwg`): the vertex count, the edge count, then one `u v w` line
//! per edge with 1-based endpoints. Output: `NO` for a disconnected graph,
//! otherwise the tree's edge indices one per line followed by the bottleneck
//! value.

use crate::graph::{Graph, GraphError, Weight};
use crate::solver::Solution;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors reading a graph description.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected {expected}, found end of input")]
    MissingLine { line: usize, expected: &'static str },

    #[error("line {line}: '{token}' is not a valid {expected}")]
    InvalidNumber {
        line: usize,
        token: String,
        expected: &'static str,
    },

    #[error("line {line}: expected 3 fields 'u v w', found {found}")]
    WrongFieldCount { line: usize, found: usize },

    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

/// Line-numbered reader over the input.
struct Lines<R> {
    inner: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<String, InputError> {
        self.line += 1;
        match self.inner.next() {
            Some(line) => Ok(line?),
            None => Err(InputError::MissingLine {
                line: self.line,
                expected,
            }),
        }
    }

    fn next_count(&mut self, expected: &'static str) -> Result<usize, InputError> {
        let line = self.next_line(expected)?;
        parse_token(line.trim(), self.line, expected)
    }
}

fn parse_token<T: FromStr>(token: &str, line: usize, expected: &'static str) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidNumber {
        line,
        token: token.to_string(),
        expected,
    })
}

/// Parse a graph in `.uwg` format. Lines after the last edge are ignored.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, InputError> {
    let mut lines = Lines::new(reader);
    let vertex_count = lines.next_count("vertex count")?;
    let edge_count = lines.next_count("edge count")?;

    let mut graph = Graph::new(vertex_count);
    for _ in 0..edge_count {
        let text = lines.next_line("edge 'u v w'")?;
        let line = lines.line;
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(InputError::WrongFieldCount {
                line,
                found: fields.len(),
            });
        }
        let u: usize = parse_token(fields[0], line, "endpoint")?;
        let v: usize = parse_token(fields[1], line, "endpoint")?;
        let weight: Weight = parse_token(fields[2], line, "weight")?;
        graph
            .new_edge_from_fields(u, v, weight)
            .map_err(|source| InputError::Graph { line, source })?;
    }
    Ok(graph)
}

/// Write a found tree or `NO`.
///
/// [`Solution::NotFound`] has no textual form; callers decide how to report it.
pub fn write_solution<W: Write>(mut writer: W, solution: &Solution) -> io::Result<()> {
    match solution {
        Solution::NoSpanningTree => writeln!(writer, "NO"),
        Solution::Found(tree) => {
            for index in &tree.edges {
                writeln!(writer, "{}", index)?;
            }
            writeln!(writer, "{}", tree.bottleneck)
        }
        Solution::NotFound => Ok(()),
    }
}
