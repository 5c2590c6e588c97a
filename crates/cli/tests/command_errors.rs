use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

/// A missing target is a hard failure: non-zero exit, no output produced.
#[test]
fn generate_training_fails_for_missing_target() {
    let dir = tempdir().expect("tempdir");
    assert_cmd::cargo::cargo_bin_cmd!("vulnslice")
        .current_dir(dir.path())
        .arg("generate-training")
        .arg("no_such_target")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target not found"));
}

#[test]
fn generate_training_fails_for_missing_engine_output_file() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("a.c");
    fs::write(&target, "int x;\n").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("vulnslice")
        .current_dir(dir.path())
        .arg("generate-training")
        .arg(&target)
        .arg("--engine-output")
        .arg("no_such_results.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Engine output file not found"));
}

#[test]
fn generate_inference_fails_for_missing_target() {
    let dir = tempdir().expect("tempdir");
    assert_cmd::cargo::cargo_bin_cmd!("vulnslice")
        .current_dir(dir.path())
        .arg("generate-inference")
        .arg("no_such_target")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target not found"));
}

#[test]
fn prepare_dataset_rejects_out_of_range_train_ratio() {
    assert_cmd::cargo::cargo_bin_cmd!("vulnslice")
        .arg("prepare-dataset")
        .arg("--train-ratio")
        .arg("1.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--train-ratio"));
}

#[test]
fn prepare_dataset_fails_for_missing_input_dir() {
    let dir = tempdir().expect("tempdir");
    assert_cmd::cargo::cargo_bin_cmd!("vulnslice")
        .current_dir(dir.path())
        .arg("prepare-dataset")
        .arg("--input-dir")
        .arg("no_such_dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to list shards"));
}

#[test]
fn stats_fails_for_missing_input_dir() {
    let dir = tempdir().expect("tempdir");
    assert_cmd::cargo::cargo_bin_cmd!("vulnslice")
        .current_dir(dir.path())
        .arg("stats")
        .arg("--input-dir")
        .arg("no_such_dir")
        .assert()
        .failure();
}
