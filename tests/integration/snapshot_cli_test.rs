//! CLI output snapshot tests
//!
//! Runs the binary against the fixture logs and pins the produced report.

use super::helpers::{fixtures_dir, logs_dir, slx_cmd};

use std::fs;
use tempfile::TempDir;

// ============================================================================
// Report Snapshots
// ============================================================================

#[test]
fn snapshot_fixture_report() {
    let home = TempDir::new().unwrap();
    let report = home.path().join("report.csv");

    slx_cmd(&home)
        .arg("extract")
        .arg(logs_dir())
        .arg(&report)
        .assert()
        .success();

    let content = fs::read_to_string(&report).unwrap();
    insta::assert_snapshot!(content.trim_end(), @r"
    Problem Name,Encoding Type,LB,UB,n,w,Number clauses,Number variables,Result,Solve time,Total real time,Total solve time,Total space
    inst42.cnf,enc-A ,,,10,3,500,80,SAT,0.91,1.2,1.1,50MB
    queen8.mtx,-ladder -split ,4,9,64,5,1200,300,SAT,400 ms,3.40 seconds,3.21 seconds,75.3 MB
    queen8.mtx,-ladder -split ,4,9,64,6,1350,330,UNSAT,2750 ms,3.40 seconds,3.21 seconds,75.3 MB
    big.mtx,-seq ,12,,5000,40,9000000,200000,TO,-,1800.02 seconds,1799.87 seconds,2100.4 MB
    huge.mtx,-product ,,,90000,70,-,-,MO,-,640.55 seconds,601.12 seconds,30720.0 MB
    queen8.mtx,-ladder ,4,9,64,5,1200,300,,15 ms,0.15 seconds,0.12 seconds,12.0 MB
    ");
}

// ============================================================================
// Split Snapshots
// ============================================================================

#[test]
fn snapshot_split_output() {
    let home = TempDir::new().unwrap();
    let output = slx_cmd(&home)
        .arg("split")
        .arg("-i")
        .arg(fixtures_dir().join("transcript.txt"))
        .arg("-o")
        .arg(home.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Command 1 saved as inst42_enc-A.txt
    Command 2 saved as queen8_ladder.txt
    ");
}

// ============================================================================
// Shell Completion Smoke Tests
// ============================================================================

#[test]
fn completions_mention_every_subcommand() {
    let home = TempDir::new().unwrap();
    let output = slx_cmd(&home)
        .args(["completions", "--shell", "bash"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let script = String::from_utf8_lossy(&output.stdout);
    for name in ["extract", "split", "config", "completions"] {
        assert!(script.contains(name), "missing {} in completions", name);
    }
}
