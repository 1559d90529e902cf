//! Integration tests for the `tl` CLI.
//!
//! Each test points `tl` at a temp config directory, runs it as a
//! subprocess, and verifies stdout and/or the preference file.

use std::fs;
use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Run `tl` with the given args against `config_dir`, returning (stdout, stderr, success).
fn run_tl(config_dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_tl"))
        .arg("--config-dir")
        .arg(config_dir)
        .args(args)
        .output()
        .expect("failed to run tl");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `tl` expecting success, return stdout.
fn run_tl_ok(config_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_tl(config_dir, args);
    if !success {
        panic!(
            "tl {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn read_prefs(config_dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(config_dir.join("prefs.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn theme_defaults_to_light() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(run_tl_ok(tmp.path(), &["theme"]), "light\n");
    // Reading never creates the store
    assert!(!tmp.path().join("prefs.json").exists());
}

#[test]
fn theme_dark_persists() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(run_tl_ok(tmp.path(), &["theme", "dark"]), "dark\n");
    assert_eq!(read_prefs(tmp.path())["darkMode"], "true");
    assert_eq!(run_tl_ok(tmp.path(), &["theme"]), "dark\n");
}

#[test]
fn theme_toggle_round_trip() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(run_tl_ok(tmp.path(), &["theme", "toggle"]), "dark\n");
    assert_eq!(run_tl_ok(tmp.path(), &["theme", "toggle"]), "light\n");
    assert_eq!(read_prefs(tmp.path())["darkMode"], "false");
}

#[test]
fn theme_no_persist_leaves_file_alone() {
    let tmp = TempDir::new().unwrap();
    run_tl_ok(tmp.path(), &["theme", "dark"]);
    assert_eq!(
        run_tl_ok(tmp.path(), &["--no-persist", "theme", "light"]),
        "light\n"
    );
    assert_eq!(read_prefs(tmp.path())["darkMode"], "true");
}

#[test]
fn theme_no_persist_after_subcommand() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(
        run_tl_ok(tmp.path(), &["theme", "dark", "--no-persist"]),
        "dark\n"
    );
    assert!(!tmp.path().join("prefs.json").exists());
}

#[test]
fn theme_json() {
    let tmp = TempDir::new().unwrap();
    let out = run_tl_ok(tmp.path(), &["theme", "dark", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["mode"], "dark");
    assert_eq!(json["dark_mode"], true);
    assert_eq!(json["persisted"], true);
}

#[test]
fn theme_reads_existing_store() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("prefs.json"), r#"{"darkMode":"true"}"#).unwrap();
    assert_eq!(run_tl_ok(tmp.path(), &["theme"]), "dark\n");
}

#[test]
fn theme_malformed_store_is_light() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("prefs.json"), "garbage").unwrap();
    assert_eq!(run_tl_ok(tmp.path(), &["theme"]), "light\n");
}

#[test]
fn paths_json() {
    let tmp = TempDir::new().unwrap();
    let out = run_tl_ok(tmp.path(), &["paths", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let dir = tmp.path().display().to_string();
    assert_eq!(json["config_dir"], dir.as_str());
    assert_eq!(
        json["prefs_file"],
        tmp.path().join("prefs.json").display().to_string().as_str()
    );
    assert_eq!(
        json["config_file"],
        tmp.path().join("config.toml").display().to_string().as_str()
    );
}

#[test]
fn invalid_theme_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_tl(tmp.path(), &["theme", "sepia"]);
    assert!(!success);
    assert!(stderr.contains("sepia"));
}
