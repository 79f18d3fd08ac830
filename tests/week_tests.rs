//! Integration tests for set, show, stats and list

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_planner, weekplan_cmd};

fn planner(locale: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    init_planner(temp.path(), locale);
    temp
}

#[test]
fn test_set_day_and_show() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["set", "mon", "++ Review PRs", "--week", "2025-W03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-W03"));

    assert!(temp.path().join("weeks/2025-W03.toml").exists());

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-W03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 3, Q1 (13.01.25 - 19.01.25)"))
        .stdout(predicate::str::contains("Monday 13.01  1/1"))
        .stdout(predicate::str::contains("Review PRs ✓"))
        .stdout(predicate::str::contains("No tasks"));
}

#[test]
fn test_set_reads_multiline_text_from_stdin() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["set", "tue", "--week", "2025-W03"])
        .write_stdin("WORK\n10:00 Standup\n+- Report\n- attach charts\n")
        .assert()
        .success();

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-W03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tuesday 14.01  0/2"))
        .stdout(predicate::str::contains("  WORK:"))
        .stdout(predicate::str::contains("10:00 Standup"))
        .stdout(predicate::str::contains("Report ◐"))
        .stdout(predicate::str::contains("      attach charts"));
}

#[test]
fn test_set_focus() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["set", "focus", "Ship the release", "--week", "2025-W03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated focus"));

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-W03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🎯 Week Focus (1)"))
        .stdout(predicate::str::contains("Ship the release"));
}

#[test]
fn test_set_invalid_day_exits_with_code_3() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["set", "someday", "text"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid day"));
}

#[test]
fn test_invalid_week_reference_exits_with_code_3() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["show", "fortnight"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid week reference"));
}

#[test]
fn test_show_incomplete_hides_done() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["set", "wed", "--week", "2025-W03"])
        .write_stdin("++ Finished thing\nOpen thing")
        .assert()
        .success();

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-W03", "--incomplete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Open thing"))
        .stdout(predicate::str::contains("Finished thing").not());
}

#[test]
fn test_show_uses_russian_locale() {
    let temp = planner("ru");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-W03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Неделя 3"))
        .stdout(predicate::str::contains("Понедельник 13.01"));
}

#[test]
fn test_locale_env_var_overrides_config() {
    let temp = planner("ru");

    weekplan_cmd()
        .current_dir(temp.path())
        .env("WEEKPLAN_LOCALE", "en")
        .args(["show", "2025-W03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday 13.01"));
}

#[test]
fn test_bare_week_reference_shows_week() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .arg("2025-W03")
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 3"));
}

#[test]
fn test_stats() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["set", "mon", "--week", "2025-W03"])
        .write_stdin("++ Do one\n+- Do two\nDo three\n\nHEADER\n- sub")
        .assert()
        .success();

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["stats", "2025-W03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-W03"))
        .stdout(predicate::str::contains("Mon  1/4 done, 1 partial"))
        .stdout(predicate::str::contains("Tue  0/1 done, 0 partial"))
        .stdout(predicate::str::contains("---\n1/10 done, 1 partial\n"));
}

#[test]
fn test_quarter_lists_weeks() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["quarter", "2025-W03"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Q1 2025\n"))
        .stdout(predicate::str::contains("Week  3  13.01.25 - 19.01.25 <"))
        .stdout(predicate::str::contains("Week 13  24.03.25 - 30.03.25"))
        .stdout(predicate::str::contains("Week 14").not());
}

#[test]
fn test_list_weeks_newest_first() {
    let temp = planner("en");

    for week in ["2025-W02", "2025-W10", "2024-W50"] {
        weekplan_cmd()
            .current_dir(temp.path())
            .args(["set", "fri", "Task", "--week", week])
            .assert()
            .success();
    }

    let output = weekplan_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let w10 = stdout.find("2025-W10").unwrap();
    let w02 = stdout.find("2025-W02").unwrap();
    let w50 = stdout.find("2024-W50").unwrap();
    assert!(w10 < w02 && w02 < w50);
    // "Task" alone is a header; each of the six empty days counts one blank task
    assert!(stdout.contains("2024-W50  Q4  0/6  🎯0  weeks/2024-W50.toml"));

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["list", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-W10"))
        .stdout(predicate::str::contains("2025-W02").not());
}

#[test]
fn test_list_shows_focus_line_count() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["set", "focus", "--week", "2025-W03"])
        .write_stdin("Ship it\n\nHire a designer")
        .assert()
        .success();

    weekplan_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-W03  Q1  0/7  🎯2"));
}

#[test]
fn test_list_empty() {
    let temp = planner("en");

    weekplan_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No weeks found"));
}

#[test]
fn test_corrupt_week_file_is_reported() {
    let temp = planner("en");
    fs::write(temp.path().join("weeks/2025-W03.toml"), "not = [valid").unwrap();

    weekplan_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-W03"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
}
