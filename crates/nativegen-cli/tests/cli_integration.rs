//! Integration tests for the nativegen binary.
//!
//! Each test runs from a fresh temporary directory so no stray
//! `nativegen.toml` is picked up.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn nativegen(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nativegen"))
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run nativegen")
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_generate_with_overrides() {
    let temp = TempDir::new().unwrap();
    let models = path_arg(&fixtures_dir().join("models"));
    let overrides = path_arg(&fixtures_dir().join("known_types.properties"));

    let output = nativegen(
        temp.path(),
        &["java.awt.Point", &overrides, "--model-dir", &models],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("data Point = native java.awt.Point where\n\n"));
    assert!(text.contains("  native x \".x\" :: Mutable s Point -> ST s Int\n"));
    assert!(text.contains("  native new :: () -> STMutable s Point\n"));
    assert!(text.contains("  native setLocation :: Mutable s Point -> Int -> Int -> ST s ()\n"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_generate_without_overrides() {
    let temp = TempDir::new().unwrap();
    let models = path_arg(&fixtures_dir().join("models"));

    let output = nativegen(temp.path(), &["java.awt.Point", "--model-dir", &models]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // Unknown types fall back to their simple names and Pure
    let text = stdout(&output);
    assert!(text.starts_with("data Point = pure native java.awt.Point where\n\n"));
    assert!(text.contains("  pure native getX :: Point -> double\n"));
    assert!(text.contains("  native setLocation :: Point -> int -> int -> ST s void\n"));
}

#[test]
fn test_project_config_discovered() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("nativegen.toml"),
        format!(
            "[generator]\nmodel-dir = {:?}\noverrides = [{:?}]\n",
            path_arg(&fixtures_dir().join("models")),
            path_arg(&fixtures_dir().join("known_types.properties")),
        ),
    )
    .unwrap();

    let output = nativegen(temp.path(), &["java.lang.System"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("  native out java.lang.System.out :: IOMutable PrintStream\n"));
    assert!(text.contains(
        "  native currentTimeMillis java.lang.System.currentTimeMillis :: () -> ST s Long\n"
    ));
}

#[test]
fn test_command_line_overrides_win() {
    let temp = TempDir::new().unwrap();
    let local = temp.path().join("local.properties");
    fs::write(&local, "java.awt.Point = io, Spot\n").unwrap();
    fs::write(
        temp.path().join("nativegen.toml"),
        format!(
            "[generator]\nmodel-dir = {:?}\noverrides = [{:?}]\n",
            path_arg(&fixtures_dir().join("models")),
            path_arg(&fixtures_dir().join("known_types.properties")),
        ),
    )
    .unwrap();

    let output = nativegen(temp.path(), &["java.awt.Point", "local.properties"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("data Spot = native java.awt.Point where\n\n"));
    assert!(text.contains("  native getX :: MutableIO Spot -> IO Double\n"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().unwrap();
    let models = path_arg(&fixtures_dir().join("models"));

    let output = nativegen(temp.path(), &["java.awt.Point", "--model-dir", &models, "-v"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("classified"));
    assert!(!stdout(&output).contains("classified"));
}

// ────────────────────────────────────────────────────────────────────────────
// Failures
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_class_argument() {
    let temp = TempDir::new().unwrap();
    let output = nativegen(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_unknown_class() {
    let temp = TempDir::new().unwrap();
    let output = nativegen(temp.path(), &["com.example.Missing"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("error: Failed to load class com.example.Missing"));
    assert!(err.contains("Class not found"));
}

#[test]
fn test_invalid_class_name() {
    let temp = TempDir::new().unwrap();
    let output = nativegen(temp.path(), &["java..Broken"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'java..Broken' is not a valid class name"));
}

#[test]
fn test_malformed_override_file() {
    let temp = TempDir::new().unwrap();
    let models = path_arg(&fixtures_dir().join("models"));
    fs::write(temp.path().join("bad.properties"), "int=pure,Int\njava.awt.Point = ,\n").unwrap();

    let output = nativegen(
        temp.path(),
        &["java.awt.Point", "bad.properties", "--model-dir", &models],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Malformed override on line 2"));
}

#[test]
fn test_missing_override_file() {
    let temp = TempDir::new().unwrap();
    let models = path_arg(&fixtures_dir().join("models"));
    let output = nativegen(
        temp.path(),
        &["java.awt.Point", "absent.properties", "--model-dir", &models],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load overrides from absent.properties"));
}
