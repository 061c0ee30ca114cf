//! Unit tests for directory aggregation

use super::helpers::{logs_dir, temp_log_dir};

use slx::{Aggregator, Outcome};
use std::fs;

#[test]
fn fixture_directory_yields_records_in_file_order() {
    let aggregate = Aggregator::new().run(&[logs_dir()]).unwrap();

    let summary: Vec<(&str, Option<Outcome>)> = aggregate
        .records
        .iter()
        .map(|r| (r.problem_name.as_str(), r.result))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("inst42.cnf", Some(Outcome::Sat)),
            ("queen8.mtx", Some(Outcome::Sat)),
            ("queen8.mtx", Some(Outcome::Unsat)),
            ("big.mtx", Some(Outcome::Timeout)),
            ("huge.mtx", Some(Outcome::MemoryOut)),
            ("queen8.mtx", None),
        ]
    );
    assert_eq!(aggregate.files.len(), 6);
    assert!(aggregate.skipped.is_empty());
}

#[test]
fn rerun_yields_identical_order() {
    let first = Aggregator::new().run(&[logs_dir()]).unwrap();
    let second = Aggregator::new().run(&[logs_dir()]).unwrap();
    assert_eq!(first.records, second.records);
    assert_eq!(first.files, second.files);
}

#[test]
fn same_directory_twice_is_not_deduplicated() {
    let temp = temp_log_dir(&["a_inst42.log"]);
    let aggregate = Aggregator::new()
        .run(&[temp.path(), temp.path()])
        .unwrap();
    assert_eq!(aggregate.records.len(), 2);
    assert_eq!(aggregate.records[0], aggregate.records[1]);
}

#[test]
fn skipped_inputs_do_not_stop_later_directories() {
    let temp = temp_log_dir(&["c_big_timeout.log"]);
    let stray = temp.path().join("c_big_timeout.log");

    let aggregate = Aggregator::new()
        .run(&[stray.as_path(), temp.path()])
        .unwrap();
    assert_eq!(aggregate.skipped, vec![stray]);
    assert_eq!(aggregate.records.len(), 1);
    assert_eq!(aggregate.records[0].result, Some(Outcome::Timeout));
}

#[test]
fn non_log_files_contribute_nothing() {
    let temp = temp_log_dir(&["a_inst42.log"]);
    fs::write(temp.path().join("README"), "notes about the batch\n").unwrap();

    let aggregate = Aggregator::new().run(&[temp.path()]).unwrap();
    assert_eq!(aggregate.files.len(), 2);
    assert_eq!(aggregate.records.len(), 1);
}
