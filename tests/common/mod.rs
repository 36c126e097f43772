// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use mfmst_search::io::read_graph;
use mfmst_search::Graph;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Path of a fixture under `tests/data`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Load a `.uwg` fixture graph.
pub fn load_graph(name: &str) -> Graph {
    let path = fixture_path(name);
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("cannot open {}: {}", path.display(), e));
    read_graph(BufReader::new(file))
        .unwrap_or_else(|e| panic!("cannot parse {}: {}", path.display(), e))
}
