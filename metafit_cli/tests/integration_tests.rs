//! Integration tests for the metafit binary.
//!
//! These tests verify end-to-end behavior including:
//! - Program creation and per-tier persistence
//! - Exercise completion and progress reporting
//! - Timer-driven auto-completion
//! - Progress journal and CSV rollup
//! - Nutrition logging

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary, homed inside the test dir
/// so no user config leaks in
fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("metafit"));
    cmd.env("HOME", dir.path());
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn test_cli_help() {
    let dir = setup_test_dir();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("metafit"));
    cmd.env("HOME", dir.path());
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("30-day fitness companion"));
}

#[test]
fn test_show_creates_program() {
    let dir = setup_test_dir();

    cli(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 1: Foundation Upper Body"))
        .stdout(predicate::str::contains("Push-ups (Modified)"))
        .stdout(predicate::str::contains("Plank Hold"));

    // The program was persisted under the explorer key
    assert!(dir.path().join("store/program-explorer.json").exists());
}

#[test]
fn test_show_specific_day_cycles_templates() {
    let dir = setup_test_dir();

    cli(&dir)
        .arg("show")
        .arg("--day")
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 4: Foundation Upper Body"));

    cli(&dir)
        .arg("show")
        .arg("--day")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Foundation Lower Body"));
}

#[test]
fn test_show_rejects_out_of_range_day() {
    let dir = setup_test_dir();

    cli(&dir).arg("show").arg("--day").arg("31").assert().failure();
    cli(&dir).arg("show").arg("--day").arg("0").assert().failure();
}

#[test]
fn test_unknown_tier_is_rejected() {
    let dir = setup_test_dir();

    cli(&dir)
        .arg("show")
        .arg("--tier")
        .arg("legend")
        .assert()
        .failure();
}

#[test]
fn test_done_marks_exercise_and_day() {
    let dir = setup_test_dir();

    cli(&dir)
        .arg("done")
        .arg("1-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise 1-1 complete"));

    // Second exercise finishes day 1: 1/30 days is 3%
    cli(&dir)
        .arg("done")
        .arg("1-2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 1 finished"))
        .stdout(predicate::str::contains("1 of 30 days complete (3%)"));

    // Completion survives a fresh invocation
    cli(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] 1-1"))
        .stdout(predicate::str::contains("✓ Completed"));
}

#[test]
fn test_done_rejects_unknown_exercise() {
    let dir = setup_test_dir();

    cli(&dir).arg("done").arg("99-9").assert().failure();
}

#[test]
fn test_tiers_track_independently() {
    let dir = setup_test_dir();

    cli(&dir).arg("done").arg("1-1").assert().success();

    // The warrior program is untouched by explorer progress
    cli(&dir)
        .arg("show")
        .arg("--tier")
        .arg("warrior")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] 1-1"))
        .stdout(predicate::str::contains("Power Upper Body"));

    assert!(dir.path().join("store/program-warrior.json").exists());
}

#[test]
fn test_timer_autocompletes_exercise() {
    let dir = setup_test_dir();

    // Day 1's plank hold runs its 30-second target without real sleeps
    cli(&dir)
        .arg("timer")
        .arg("1-2")
        .arg("--fast")
        .assert()
        .success()
        .stdout(predicate::str::contains("Timer started: 00:30"))
        .stdout(predicate::str::contains("exercise 1-2 complete"));

    cli(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] 1-2"));
}

#[test]
fn test_timer_rejects_rep_exercise_without_duration() {
    let dir = setup_test_dir();

    cli(&dir).arg("timer").arg("1-1").arg("--fast").assert().failure();

    // An explicit duration makes any exercise timeable
    cli(&dir)
        .arg("timer")
        .arg("1-1")
        .arg("--duration")
        .arg("3")
        .arg("--fast")
        .assert()
        .success()
        .stdout(predicate::str::contains("exercise 1-1 complete"));
}

#[test]
fn test_status_reports_summary_and_milestones() {
    let dir = setup_test_dir();

    cli(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed: 0 days"))
        .stdout(predicate::str::contains("Remaining: 30 days"))
        .stdout(predicate::str::contains("☆ First Victory"));
}

#[test]
fn test_log_appends_and_unlocks_milestones() {
    let dir = setup_test_dir();

    cli(&dir)
        .arg("log")
        .arg("--weight")
        .arg("71.5")
        .arg("--workouts")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress logged"))
        .stdout(predicate::str::contains("Milestone unlocked: First Victory"));

    assert!(dir.path().join("journal/progress.jsonl").exists());

    cli(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Latest weight: 71.5 kg"))
        .stdout(predicate::str::contains("★ First Victory"));
}

#[test]
fn test_log_with_no_fields_is_a_noop() {
    let dir = setup_test_dir();

    cli(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to log"));

    assert!(!dir.path().join("journal/progress.jsonl").exists());
}

#[test]
fn test_rollup_archives_journal() {
    let dir = setup_test_dir();

    cli(&dir).arg("log").arg("--weight").arg("72").assert().success();
    cli(&dir).arg("log").arg("--calories").arg("1900").assert().success();

    cli(&dir)
        .arg("rollup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled up 2 entries to CSV"));

    assert!(dir.path().join("progress.csv").exists());
    assert!(!dir.path().join("journal/progress.jsonl").exists());
    assert!(dir
        .path()
        .join("journal/progress.jsonl.processed")
        .exists());

    // Cleanup removes the archived journal
    cli(&dir).arg("log").arg("--weight").arg("71").assert().success();
    cli(&dir).arg("rollup").arg("--cleanup").assert().success();
    assert!(!dir
        .path()
        .join("journal/progress.jsonl.processed")
        .exists());
}

#[test]
fn test_rollup_without_journal() {
    let dir = setup_test_dir();

    cli(&dir)
        .arg("rollup")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to roll up"));
}

#[test]
fn test_food_search_and_log() {
    let dir = setup_test_dir();

    cli(&dir)
        .arg("food")
        .arg("--search")
        .arg("banana")
        .assert()
        .success()
        .stdout(predicate::str::contains("Banana (1 medium)"));

    cli(&dir)
        .arg("food")
        .arg("--add")
        .arg("banana")
        .arg("--qty")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Banana (1 medium) x2"))
        .stdout(predicate::str::contains("Totals: 210 kcal"));

    // The log accumulates within the day
    cli(&dir)
        .arg("food")
        .assert()
        .success()
        .stdout(predicate::str::contains("Banana"));
}

#[test]
fn test_food_rejects_unknown_id() {
    let dir = setup_test_dir();

    cli(&dir).arg("food").arg("--add").arg("pizza").assert().failure();
}

#[test]
fn test_program_record_shape() {
    let dir = setup_test_dir();

    cli(&dir).arg("show").assert().success();

    let raw = std::fs::read_to_string(dir.path().join("store/program-explorer.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["tier"], "explorer");
    let days = value["days"].as_array().unwrap();
    assert_eq!(days.len(), 30);
    assert_eq!(days[0]["day"], 1);
    assert_eq!(days[29]["day"], 30);
    assert_eq!(days[0]["exercises"][0]["completed"], false);
}
