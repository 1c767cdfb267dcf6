//! Integration tests for the chain-reaction binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory holding a small word list.
fn word_list() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("words.txt"),
        "fire\nheat\r\nFLAME\n  ember  \nab\n\n",
    )
    .unwrap();
    dir
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("chain-reaction").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// -- help --

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("seeds"))
        .stdout(predicate::str::contains("--words path/to/words_alpha.txt"));
}

// -- seeds --

#[test]
fn seeds_table() {
    cmd()
        .arg("seeds")
        .assert()
        .success()
        .stdout(predicate::str::contains("FIRE"))
        .stdout(predicate::str::contains("Think heat, energy"))
        .stdout(predicate::str::contains("16 seed words"));
}

#[test]
fn seeds_json() {
    let output = cmd().args(["seeds", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let seeds = parsed.as_array().unwrap();
    assert_eq!(seeds.len(), 16);
    assert_eq!(seeds[0]["word"], "FIRE");
    assert!(seeds.iter().all(|s| s["hint"].is_string()));
}

// -- check --

#[test]
fn check_against_word_list() {
    let dir = word_list();
    let list = dir.path().join("words.txt");

    cmd()
        .args(["check", "heat", "Ember", "zzzqq", "--words"])
        .arg(&list)
        .assert()
        .success()
        .stdout(predicate::str::contains("HEAT: valid"))
        .stdout(predicate::str::contains("EMBER: valid"))
        .stdout(predicate::str::contains("ZZZQQ: not a valid English word"))
        .stdout(predicate::str::contains("basic").not())
        .stdout(predicate::str::contains("Pass --words").not());
}

#[test]
fn check_without_list_uses_fallback() {
    cmd()
        .args(["check", "zzzqq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word validation will be basic"))
        .stdout(predicate::str::contains("Pass --words"))
        .stdout(predicate::str::contains("ZZZQQ: valid"));
}

#[test]
fn check_fallback_rejects_non_letters() {
    cmd()
        .args(["check", "abc123", "ab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABC123: not a valid English word"))
        .stdout(predicate::str::contains("AB: not a valid English word"));
}

#[test]
fn check_missing_list_falls_back() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["check", "heat", "--words"])
        .arg(dir.path().join("missing.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Word validation will be basic"))
        .stdout(predicate::str::contains("HEAT: valid"));
}

#[test]
fn check_json() {
    let dir = word_list();
    let output = cmd()
        .args(["check", "fire", "water", "--json", "--words"])
        .arg(dir.path().join("words.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["mode"], "full");
    assert_eq!(parsed["words"][0]["word"], "FIRE");
    assert_eq!(parsed["words"][0]["valid"], true);
    assert_eq!(parsed["words"][1]["valid"], false);
}

#[test]
fn check_json_reports_fallback_mode() {
    let output = cmd()
        .args(["check", "heat", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["mode"], "fallback");
    assert_eq!(parsed["words"][0]["valid"], true);
}

#[test]
fn check_requires_words() {
    cmd().arg("check").assert().failure();
}
