//! Basic CLI E2E tests.
//!
//! Each test runs the built `hts` binary against its own data directory.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_hts"))
        .args(args)
        .env("HTS_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    stdout
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_goal_list_has_seed() {
    let dir = TempDir::new().unwrap();
    let goals = json(&run_ok(dir.path(), &["goal", "list"]));
    let goals = goals.as_array().unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["title"], "Define 3 priorities for this week");
    assert_eq!(goals[0]["done"], false);
}

#[test]
fn test_goal_add_and_done() {
    let dir = TempDir::new().unwrap();
    let id = run_ok(dir.path(), &["goal", "add", "Ship it", "--notes", "by friday"]);
    let id = id.trim();

    run_ok(dir.path(), &["goal", "done", id]);

    let goals = json(&run_ok(dir.path(), &["goal", "list"]));
    assert_eq!(goals[0]["id"], id);
    assert_eq!(goals[0]["notes"], "by friday");
    assert_eq!(goals[0]["done"], true);
}

#[test]
fn test_goal_empty_title_rejected() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["goal", "add", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Goal title is required."));
}

#[test]
fn test_unknown_goal_id_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["goal", "delete", "missing"]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_habit_streak_after_checking_all() {
    let dir = TempDir::new().unwrap();
    let listed = json(&run_ok(dir.path(), &["habit", "list"]));
    assert_eq!(listed["streak"], 0);

    let ids: Vec<String> = listed["habits"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_str().unwrap().to_string())
        .collect();
    for id in &ids {
        run_ok(dir.path(), &["habit", "check", id]);
    }

    assert_eq!(run_ok(dir.path(), &["habit", "streak"]).trim(), "1");
    let listed = json(&run_ok(dir.path(), &["habit", "list"]));
    assert!(listed["habits"]
        .as_array()
        .unwrap()
        .iter()
        .all(|h| h["checkedToday"] == true));
}

#[test]
fn test_journal_draft_and_commit() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["journal", "draft", "--title", "Monday", "--body", "Good day."]);
    let draft = json(&run_ok(dir.path(), &["journal", "show-draft"]));
    assert_eq!(draft["body"], "Good day.");

    run_ok(dir.path(), &["journal", "commit"]);

    let entries = json(&run_ok(dir.path(), &["journal", "list"]));
    assert_eq!(entries[0]["title"], "Monday");
    let draft = json(&run_ok(dir.path(), &["journal", "show-draft"]));
    assert_eq!(draft["body"], "");
}

#[test]
fn test_journal_commit_requires_body() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["journal", "commit"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Journal body is required."));
}

#[test]
fn test_focus_preset_and_status() {
    let dir = TempDir::new().unwrap();
    let status = json(&run_ok(dir.path(), &["focus", "status"]));
    assert_eq!(status["display"], "25:00");

    run_ok(dir.path(), &["focus", "preset", "45"]);
    let status = json(&run_ok(dir.path(), &["focus", "status"]));
    assert_eq!(status["display"], "45:00");
    assert_eq!(status["state"], "paused");

    let (_, _, code) = run_cli(dir.path(), &["focus", "preset", "0"]);
    assert_eq!(code, 1);
}

#[test]
fn test_focus_run_stops_after_cycles() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["focus", "preset", "1"]);
    run_ok(dir.path(), &["config", "set", "timer.tick_interval_ms", "1"]);

    let stdout = run_ok(dir.path(), &["focus", "run", "--cycles", "1", "--quiet"]);
    assert!(stdout.contains("\"type\":\"ModeChanged\""));
    assert!(stdout.contains("\"break\""));
}

#[test]
fn test_settings_toggle() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &["settings", "notifications", "on"]);
    assert_eq!(out.trim(), "Notifications enabled.");
    run_ok(dir.path(), &["settings", "offline", "off"]);

    let focus = json(&run_ok(dir.path(), &["settings", "show"]));
    assert_eq!(focus["notificationsEnabled"], true);
    assert_eq!(focus["offlineEnabled"], false);
}

#[test]
fn test_export_import_roundtrip() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["goal", "add", "Keep me"]);
    let exported = run_ok(dir.path(), &["data", "export", "--stdout"]);

    let export_file = dir.path().join("backup.json");
    std::fs::write(&export_file, &exported).unwrap();

    run_ok(dir.path(), &["data", "reset", "--yes"]);
    let goals = json(&run_ok(dir.path(), &["goal", "list"]));
    assert_eq!(goals.as_array().unwrap().len(), 1);

    run_ok(dir.path(), &["data", "import", export_file.to_str().unwrap()]);
    let goals = json(&run_ok(dir.path(), &["goal", "list"]));
    assert_eq!(goals[0]["title"], "Keep me");
    assert_eq!(json(&exported), json(&run_ok(dir.path(), &["data", "export", "--stdout"])));
}

#[test]
fn test_export_writes_dated_file() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("exports");
    std::fs::create_dir(&out_dir).unwrap();

    let path = run_ok(dir.path(), &["data", "export", "--dir", out_dir.to_str().unwrap()]);
    let path = Path::new(path.trim());
    assert!(path.exists());
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("help-thy-self-data-") && name.ends_with(".json"));
}

#[test]
fn test_import_malformed_fails() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json").unwrap();

    let (_, stderr, code) = run_cli(dir.path(), &["data", "import", bad.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Import failed."));
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["data", "reset"]);
    assert_eq!(code, 1);
}

#[test]
fn test_quote_favorites() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run_ok(dir.path(), &["quote", "favorite", "0"]).trim(), "Saved to favorites.");
    assert_eq!(run_ok(dir.path(), &["quote", "favorite", "0"]).trim(), "Already in favorites.");
    let favorites = json(&run_ok(dir.path(), &["quote", "favorites"]));
    assert_eq!(favorites.as_array().unwrap().len(), 1);
}

#[test]
fn test_affirmation_add_and_list() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["affirmation", "add", "I finish what I start."]);
    let pool = json(&run_ok(dir.path(), &["affirmation", "list"]));
    let pool = pool.as_array().unwrap();
    assert_eq!(pool.len(), 8);
    assert_eq!(pool[7], "I finish what I start.");
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run_ok(dir.path(), &["config", "get", "log.level"]).trim(), "warn");
    run_ok(dir.path(), &["config", "set", "log.level", "debug"]);
    assert_eq!(run_ok(dir.path(), &["config", "get", "log.level"]).trim(), "debug");

    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key: nope"));
}
