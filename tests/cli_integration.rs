//! Integration tests for the `docket` CLI.
//!
//! Each test points `docket` at a task document in a temp directory, runs it
//! as a subprocess, and checks stdout and/or the document on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Get the path to the built `docket` binary.
fn docket_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("docket");
    path
}

/// Run docket against `file`, with an empty config so the user's own
/// config never leaks in.
fn docket(dir: &Path, file: &Path, args: &[&str]) -> Output {
    let config = dir.join("config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    Command::new(docket_bin())
        .arg("--file")
        .arg(file)
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .current_dir(dir)
        .output()
        .expect("failed to run docket")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn add(dir: &Path, file: &Path, topic: &str, extra: &[&str]) -> Output {
    let mut args = vec![
        "add",
        "--topic",
        topic,
        "--description",
        "notes",
        "--date",
        "2024-01-15",
    ];
    args.extend_from_slice(extra);
    docket(dir, file, &args)
}

fn setup() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("tasks.json");
    (tmp, file)
}

#[test]
fn add_writes_document() {
    let (tmp, file) = setup();
    let out = add(
        tmp.path(),
        &file,
        "Team Meeting",
        &["--time", "9:30 AM", "--priority", "high"],
    );
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "added row 1: Team Meeting\n");

    let doc = fs::read_to_string(&file).unwrap();
    let expected = r#"[
    {
        "topic": "Team Meeting",
        "description": "notes",
        "date": "2024-01-15",
        "time": "9:30 AM",
        "priority": "High",
        "completed": false
    }
]
"#;
    assert_eq!(doc, expected);
}

#[test]
fn add_defaults_time_and_priority() {
    let (tmp, file) = setup();
    add(tmp.path(), &file, "Dentist", &[]);
    let out = docket(tmp.path(), &file, &["show", "1"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Time:        12:00 PM"));
    assert!(text.contains("Priority:    Medium"));
    assert!(text.contains("Status:      Pending"));
}

#[test]
fn add_rejects_blank_fields() {
    let (tmp, file) = setup();
    let out = docket(
        tmp.path(),
        &file,
        &["add", "--topic", "  ", "--description", "", "--date", "2024-01-15"],
    );
    assert!(!out.status.success());
    assert!(stderr(&out).contains("required: topic, description"));
    assert!(!file.exists());
}

#[test]
fn add_rejects_unknown_priority() {
    let (tmp, file) = setup();
    let out = add(tmp.path(), &file, "A", &["--priority", "Urgent"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("invalid priority 'Urgent'"));
}

#[test]
fn list_numbers_rows_and_filters() {
    let (tmp, file) = setup();
    add(tmp.path(), &file, "Team Meeting", &[]);
    add(tmp.path(), &file, "Groceries", &[]);
    add(tmp.path(), &file, "Meet the plumber", &[]);

    let out = docket(tmp.path(), &file, &["list"]);
    let lines: Vec<String> = stdout(&out).lines().map(String::from).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("  1  [ ]"));
    assert!(lines[2].contains("Meet the plumber"));

    let out = docket(tmp.path(), &file, &["list", "--search", "MEET"]);
    let text = stdout(&out);
    assert!(text.contains("  1  [ ]"));
    assert!(text.contains("  3  [ ]"));
    assert!(!text.contains("Groceries"));

    let out = docket(tmp.path(), &file, &["list", "--search", "zzz"]);
    assert_eq!(stdout(&out), "no tasks match 'zzz'\n");
}

#[test]
fn list_on_missing_document_is_empty() {
    let (tmp, file) = setup();
    let out = docket(tmp.path(), &file, &["list"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "no tasks\n");
    assert!(!file.exists());
}

#[test]
fn list_json() {
    let (tmp, file) = setup();
    add(tmp.path(), &file, "A", &["--priority", "Low"]);
    let out = docket(tmp.path(), &file, &["list", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value[0]["row"], 1);
    assert_eq!(value[0]["topic"], "A");
    assert_eq!(value[0]["priority"], "Low");
    assert_eq!(value[0]["completed"], false);
}

#[test]
fn update_changes_only_given_fields() {
    let (tmp, file) = setup();
    add(tmp.path(), &file, "Team Meeting", &["--time", "9:30 AM"]);
    docket(tmp.path(), &file, &["toggle", "1"]);

    let out = docket(
        tmp.path(),
        &file,
        &["update", "1", "--topic", "Team Sync", "--priority", "Low"],
    );
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let out = docket(tmp.path(), &file, &["show", "1", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["topic"], "Team Sync");
    assert_eq!(value["description"], "notes");
    assert_eq!(value["time"], "9:30 AM");
    assert_eq!(value["priority"], "Low");
    // Completion survives an update
    assert_eq!(value["completed"], true);
}

#[test]
fn toggle_flips_status() {
    let (tmp, file) = setup();
    add(tmp.path(), &file, "A", &[]);
    let out = docket(tmp.path(), &file, &["toggle", "1"]);
    assert_eq!(stdout(&out), "row 1 is now Complete\n");
    let out = docket(tmp.path(), &file, &["toggle", "1"]);
    assert_eq!(stdout(&out), "row 1 is now Pending\n");
}

#[test]
fn delete_requires_yes() {
    let (tmp, file) = setup();
    add(tmp.path(), &file, "A", &[]);
    add(tmp.path(), &file, "B", &[]);

    let out = docket(tmp.path(), &file, &["delete", "1"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("without --yes"));

    let out = docket(tmp.path(), &file, &["delete", "1", "--yes"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "deleted row 1: A\n");

    // Rows renumber after a delete
    let out = docket(tmp.path(), &file, &["show", "1"]);
    assert!(stdout(&out).contains("Topic:       B"));
}

#[test]
fn out_of_range_rows_fail() {
    let (tmp, file) = setup();
    add(tmp.path(), &file, "A", &[]);
    for args in [
        vec!["show", "2"],
        vec!["toggle", "5"],
        vec!["delete", "2", "--yes"],
        vec!["update", "3", "--topic", "X"],
    ] {
        let out = docket(tmp.path(), &file, &args);
        assert!(!out.status.success(), "{:?} should fail", args);
        assert!(stderr(&out).contains("no task at row"), "{:?}", args);
    }

    let out = docket(tmp.path(), &file, &["show", "0"]);
    assert!(stderr(&out).contains("row numbers start at 1"));
}

#[test]
fn corrupt_document_is_refused() {
    let (tmp, file) = setup();
    fs::write(&file, "not json").unwrap();
    let out = docket(tmp.path(), &file, &["list"]);
    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains("error: could not parse"), "stderr: {}", err);
    // The document is left in place
    assert_eq!(fs::read_to_string(&file).unwrap(), "not json");
}

#[test]
fn storage_file_from_config() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.toml");
    fs::write(&config, "[storage]\nfile = \"from-config.json\"\n").unwrap();

    let out = Command::new(docket_bin())
        .args(["--config"])
        .arg(&config)
        .args([
            "add",
            "--topic",
            "A",
            "--description",
            "B",
            "--date",
            "2024-01-15",
        ])
        .env_remove("RUST_LOG")
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(tmp.path().join("from-config.json").exists());
}

#[test]
fn malformed_config_is_an_error() {
    let (tmp, file) = setup();
    fs::write(tmp.path().join("config.toml"), "[storage\n").unwrap();
    let out = docket(tmp.path(), &file, &["list"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("config.toml"));
}
