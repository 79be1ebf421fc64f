//! Integration tests for the lunary CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lunary() -> Command {
    let mut cmd = Command::cargo_bin("lunary").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("LUNARY_LOG");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = lunary().args(args).output().unwrap();
    assert!(output.status.success(), "{args:?} failed");
    String::from_utf8(output.stdout).unwrap()
}

/// A temp directory holding a small custom deck.
fn custom_deck(json: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("deck.json"), json).unwrap();
    dir
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_is_deterministic() {
    let a = stdout_of(&["draw", "2025-01-01", "--name", "Alice"]);
    let b = stdout_of(&["draw", "2025-01-01", "--name", "Alice"]);
    assert_eq!(a, b);
    assert!(a.contains("2025-01-01|alice"));
}

#[test]
fn draw_same_day_timestamps_agree() {
    let day = stdout_of(&["draw", "2025-01-01"]);
    let stamp = stdout_of(&["draw", "2025-01-01T23:59:59Z"]);
    assert_eq!(day, stamp);
}

#[test]
fn draw_json() {
    let out = stdout_of(&["draw", "daily-2025-03-01", "--name", "Bob", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["seed"], "daily-2025-03-01|bob");
    let index = value["index"].as_u64().unwrap();
    assert!(index < 78);
    assert!(value["item"]["name"].is_string());
}

#[test]
fn draw_defaults_to_today() {
    lunary()
        .args(["draw", "--offset", "+02:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed:"));
}

// ---------------------------------------------------------------------------
// card
// ---------------------------------------------------------------------------

#[test]
fn card_lookup_is_case_insensitive() {
    lunary()
        .args(["card", "the fool"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fool"))
        .stdout(predicate::str::contains("Major Arcana"))
        .stdout(predicate::str::contains("index:  0"));
}

#[test]
fn card_shows_number() {
    lunary()
        .args(["card", "Three of Swords"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Swords"))
        .stdout(predicate::str::contains("number: Three"));
}

#[test]
fn card_unknown_fails() {
    lunary()
        .args(["card", "The Comet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown card: The Comet"));
}

// ---------------------------------------------------------------------------
// --deck
// ---------------------------------------------------------------------------

#[test]
fn custom_deck_is_used() {
    let dir = custom_deck(
        r#"[
            {"name": "Sun", "keywords": ["light"], "information": "Warmth."},
            {"name": "Moon", "keywords": ["night"], "information": "Dreams."}
        ]"#,
    );
    let path = dir.path().join("deck.json");
    let out = stdout_of(&["draw", "2025-01-01", "--deck", path.to_str().unwrap()]);
    assert!(out.contains("Sun") || out.contains("Moon"));
    assert!(out.contains("of 2"));
}

#[test]
fn empty_deck_fails() {
    let dir = custom_deck("[]");
    lunary()
        .args(["draw", "--deck"])
        .arg(dir.path().join("deck.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn duplicate_deck_fails() {
    let dir = custom_deck(
        r#"[
            {"name": "Sun", "keywords": [], "information": ""},
            {"name": " SUN ", "keywords": [], "information": ""}
        ]"#,
    );
    lunary()
        .args(["card", "Sun", "--deck"])
        .arg(dir.path().join("deck.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate"));
}

#[test]
fn missing_deck_file_fails() {
    let dir = TempDir::new().unwrap();
    lunary()
        .args(["card", "Sun", "--deck"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read deck"));
}

// ---------------------------------------------------------------------------
// reading
// ---------------------------------------------------------------------------

#[test]
fn reading_text() {
    lunary()
        .args(["reading", "--name", "Alice", "--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card of the day"))
        .stdout(predicate::str::contains("Card of the week"))
        .stdout(predicate::str::contains("Focus on:"))
        .stdout(predicate::str::contains("Trends"));
}

#[test]
fn reading_json() {
    let out = stdout_of(&[
        "reading",
        "--name",
        "Alice",
        "--birthday",
        "1990-05-01",
        "--date",
        "2025-06-04",
        "--week-start",
        "mon",
        "--days",
        "14",
        "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["date"], "2025-06-04");
    assert_eq!(value["week_start"], "2025-06-02");
    assert_eq!(value["guidance"]["action_points"].as_array().unwrap().len(), 3);
    assert_eq!(value["trends"]["timeframe_days"], 14);
}

#[test]
fn reading_without_trends() {
    let out = stdout_of(&["reading", "--date", "2025-06-01", "--no-trends", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(value["trends"].is_null());
}

#[test]
fn reading_rejects_bad_date() {
    lunary()
        .args(["reading", "--date", "June 1st"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

#[test]
fn general_history_includes_the_day() {
    lunary()
        .args(["history", "--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-01"))
        .stdout(predicate::str::contains("2025-05-26"))
        .stdout(predicate::str::contains("7 days"));
}

#[test]
fn personal_history_starts_yesterday() {
    let out = stdout_of(&["history", "--name", "Alice", "--date", "2025-06-01", "--days", "3"]);
    assert!(out.contains("2025-05-31"));
    assert!(out.contains("2025-05-29"));
    assert!(!out.contains("2025-06-01"));
    assert!(out.contains("3 days"));
}

// ---------------------------------------------------------------------------
// trends
// ---------------------------------------------------------------------------

#[test]
fn trends_json() {
    let out = stdout_of(&[
        "trends", "--name", "Alice", "--date", "2025-06-01", "--days", "60", "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["timeframe_days"], 60);
    assert_eq!(value["dominant_themes"].as_array().unwrap().len(), 3);
}

#[test]
fn trends_requires_name() {
    lunary().args(["trends"]).assert().failure();
}

#[test]
fn invalid_offset_fails() {
    lunary()
        .args(["draw", "--offset", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid UTC offset"));
}

// ---------------------------------------------------------------------------
// draw --from
// ---------------------------------------------------------------------------

#[test]
fn draw_from_items_is_deterministic() {
    let args = ["draw", "2025-01-01", "--from", "yes", "--from", "no", "--from", "maybe"];
    let a = stdout_of(&args);
    let b = stdout_of(&args);
    assert_eq!(a, b);
    let item = a.lines().next().unwrap().trim();
    assert!(["yes", "no", "maybe"].contains(&item));
    assert!(!a.contains("of 78"));
}

#[test]
fn draw_from_items_json() {
    let out = stdout_of(&[
        "draw", "2025-01-01", "--name", "Alice", "--from", "red", "--from", "blue", "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["seed"], "2025-01-01|alice");
    let item = value["item"].as_str().unwrap();
    assert!(item == "red" || item == "blue");
}

// ---------------------------------------------------------------------------
// calendar edges
// ---------------------------------------------------------------------------

#[test]
fn history_clamps_huge_day_counts() {
    let out = stdout_of(&[
        "history", "--name", "Alice", "--date", "2025-06-01", "--days", "100000000",
    ]);
    assert!(out.contains("365 days"));
}

#[test]
fn trends_clamp_huge_day_counts() {
    let out = stdout_of(&[
        "trends", "--name", "Alice", "--date", "2025-06-01", "--days", "100000000", "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["timeframe_days"], 365);
}

#[test]
fn reading_near_the_earliest_date() {
    lunary()
        .args(["reading", "--date=-262143-01-02", "--no-trends"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card of the week"));
    lunary()
        .args(["reading", "--name", "Alice", "--date=-262143-01-02", "--json"])
        .assert()
        .success();
}

#[test]
fn history_near_the_earliest_date() {
    lunary()
        .args(["history", "--date=-262143-01-02"])
        .assert()
        .success();
    lunary()
        .args(["history", "--name", "Alice", "--date=-262143-01-02", "--days", "30"])
        .assert()
        .success();
}

#[test]
fn reading_today_follows_offset() {
    let east = stdout_of(&["reading", "--offset", "+14:00", "--no-trends", "--json"]);
    let west = stdout_of(&["reading", "--offset", "-12:00", "--no-trends", "--json"]);
    let east: serde_json::Value = serde_json::from_str(&east).unwrap();
    let west: serde_json::Value = serde_json::from_str(&west).unwrap();
    assert_ne!(east["date"], west["date"]);
}
