//! End-to-end tests: load resources from disk, render, and run the binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use twin_prompt::{
    CRITICAL_RULES, FixedClock, PromptComposer, PromptError, ResourceSource, TIMESTAMP_FORMAT,
    TwinConfig,
};

fn write_resources(root: &Path, facts: &str) {
    fs::write(root.join("facts.json"), facts).unwrap();
    fs::write(root.join("summary.txt"), "Loves ML.").unwrap();
    fs::write(root.join("linkedin.txt"), "Senior Engineer.").unwrap();
    fs::write(root.join("style.txt"), "Casual and upbeat.").unwrap();
}

const JANE: &str = r#"{"full_name": "Jane Doe", "name": "Jane"}"#;

#[test]
fn loads_and_renders_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_resources(dir.path(), JANE);

    let resources = TwinConfig::new(dir.path()).resource_dir().load().unwrap();
    let clock = FixedClock::parse("2025-06-30 08:15:00").unwrap();
    let prompt = PromptComposer::new(resources)
        .with_clock(clock)
        .compose()
        .unwrap();

    for needle in ["Jane Doe", "Jane", "Loves ML.", "Senior Engineer.", "Casual and upbeat."] {
        assert!(prompt.contains(needle), "missing {needle:?}");
    }
    assert!(prompt.contains("2025-06-30 08:15:00"));
    for (i, rule) in CRITICAL_RULES.iter().enumerate() {
        assert!(prompt.contains(&format!("{}. {rule}", i + 1)));
    }
}

#[test]
fn system_clock_timestamp_is_well_formed() {
    let dir = tempfile::tempdir().unwrap();
    write_resources(dir.path(), JANE);
    let resources = TwinConfig::new(dir.path()).resource_dir().load().unwrap();

    let prompt = PromptComposer::new(resources).compose().unwrap();
    let marker = "current date and time:\n";
    let line = prompt
        .split_once(marker)
        .and_then(|(_, rest)| rest.lines().next())
        .unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(line, TIMESTAMP_FORMAT).is_ok(), "{line:?}");
}

#[test]
fn facts_without_name_fail_at_compose() {
    let dir = tempfile::tempdir().unwrap();
    write_resources(dir.path(), r#"{"full_name": "Jane Doe"}"#);

    let resources = TwinConfig::new(dir.path()).resource_dir().load().unwrap();
    let err = PromptComposer::new(resources).compose().unwrap_err();
    assert_eq!(err, PromptError::MissingFact { key: "name".into() });
}

#[test]
fn binary_prints_prompt() {
    let dir = tempfile::tempdir().unwrap();
    write_resources(dir.path(), JANE);

    let output = Command::new(env!("CARGO_BIN_EXE_twin-prompt"))
        .arg("--resources")
        .arg(dir.path())
        .args(["--at", "2025-01-02 12:00:00"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# Your Role"));
    assert!(stdout.contains("2025-01-02 12:00:00"));
    assert!(stdout.contains("Senior Engineer."));
}

#[test]
fn binary_reports_missing_fact() {
    let dir = tempfile::tempdir().unwrap();
    write_resources(dir.path(), r#"{"name": "Jane"}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_twin-prompt"))
        .arg("--resources")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("full_name"), "{stderr}");
}
