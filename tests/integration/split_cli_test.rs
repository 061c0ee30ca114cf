//! `slx split` end-to-end tests

use super::helpers::{fixtures_dir, slx_cmd, write_config};

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn split_writes_one_file_per_command() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("commands");

    slx_cmd(&home)
        .arg("split")
        .arg("--input")
        .arg(fixtures_dir().join("transcript.txt"))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Command 1 saved as inst42_enc-A.txt"))
        .stdout(predicate::str::contains("Command 2 saved as queen8_ladder.txt"));

    assert!(out.join("inst42_enc-A.txt").is_file());
    assert!(out.join("queen8_ladder.txt").is_file());
}

#[test]
fn split_reads_transcript_location_from_config() {
    let home = TempDir::new().unwrap();
    let transcript = home.path().join("batch.txt");
    fs::copy(fixtures_dir().join("transcript.txt"), &transcript).unwrap();
    let out = home.path().join("out");
    write_config(
        &home,
        &format!(
            "[split]\ntranscript = {:?}\noutput_dir = {:?}\n",
            transcript.display().to_string(),
            out.display().to_string()
        ),
    );

    slx_cmd(&home).arg("split").assert().success();
    assert!(out.join("queen8_ladder.txt").is_file());
}

#[test]
fn split_numbers_commands_by_transcript_position() {
    let home = TempDir::new().unwrap();
    let transcript = home.path().join("batch.txt");
    fs::write(
        &transcript,
        "Run command: ./abw a.mtx -seq\nCommand executed successfully: ...\n\
         Run command: ./abw b.mtx -seq\nCommand executed successfully: b_seq.\n",
    )
    .unwrap();

    slx_cmd(&home)
        .arg("split")
        .arg("-i")
        .arg(&transcript)
        .arg("-o")
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Command 1 skipped"))
        .stdout(predicate::str::contains("Command 2 saved as b_seq.txt"));
    assert!(home.path().join("b_seq.txt").is_file());
}

#[test]
fn split_without_blocks_reports_it() {
    let home = TempDir::new().unwrap();
    let transcript = home.path().join("empty.txt");
    fs::write(&transcript, "nothing ran\n").unwrap();

    slx_cmd(&home)
        .arg("split")
        .arg("-i")
        .arg(&transcript)
        .arg("-o")
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No command blocks found"));
}

#[test]
fn split_missing_transcript_fails() {
    let home = TempDir::new().unwrap();
    slx_cmd(&home)
        .arg("split")
        .arg("-i")
        .arg(home.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read transcript"));
}
