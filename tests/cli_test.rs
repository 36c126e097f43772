// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runs the `mfmst` binary on fixture files.

mod common;

use common::fixture_path;
use std::fs::File;
use std::process::{Command, Output};

fn run(fixture: &str, envs: &[(&str, &str)]) -> Output {
    let input = File::open(fixture_path(fixture)).expect("fixture exists");
    Command::new(env!("CARGO_BIN_EXE_mfmst"))
        .stdin(input)
        .env_remove("RUST_LOG")
        .env_remove("MFMST_SOLVER")
        .env_remove("MFMST_SEED")
        .env_remove("MFMST_CANDIDATE_PAIRS")
        .env("MFMST_TIME_BUDGET_MS", "2000")
        .envs(envs.iter().copied())
        .output()
        .expect("binary runs")
}

#[test]
fn test_prints_tree_then_bottleneck() {
    let output = run("test02.uwg", &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\n7\n3\n6\n16\n");
}

#[test]
fn test_prints_no_for_disconnected_graph() {
    let output = run("disconnected.uwg", &[("MFMST_SOLVER", "random")]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "NO\n");
}

#[test]
fn test_fails_when_candidates_hold_no_tree() {
    let output = run("test05_narrow_candidates.uwg", &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let output = run("test05_narrow_candidates.uwg", &[("MFMST_CANDIDATE_PAIRS", "all")]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n3\n4\n11\n");
}

#[test]
fn test_rejects_bad_configuration() {
    let output = run("test01.uwg", &[("MFMST_TIME_BUDGET_MS", "soon")]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("MFMST_TIME_BUDGET_MS"));
}
