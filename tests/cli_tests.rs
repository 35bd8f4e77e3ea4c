//! End-to-end runs of the `khouse-server` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn khouse(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_khouse-server"))
        .current_dir(dir)
        .env_remove("GEMINI_API_KEY")
        .arg("--no-color")
        .args(args)
        .output()
        .expect("binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_init_then_validate() {
    let dir = TempDir::new().unwrap();

    let init = khouse(dir.path(), &["init", "--port", "4000"]);
    assert!(init.status.success(), "stderr: {}", String::from_utf8_lossy(&init.stderr));
    assert!(dir.path().join("khouse.toml").exists());
    assert!(dir.path().join(".env.example").exists());

    let validate = khouse(dir.path(), &["config", "--validate"]);
    assert!(validate.status.success());
    assert!(stdout(&validate).contains("is valid"));

    let summary = stdout(&khouse(dir.path(), &["config"]));
    assert!(summary.contains(":4000"));
}

#[test]
fn test_config_validate_fails_on_bad_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("khouse.toml"),
        "[site]\ndefault_language = \"xx\"\n",
    )
    .unwrap();

    let output = khouse(dir.path(), &["config", "--validate"]);
    assert!(!output.status.success());
}

#[test]
fn test_catalog_check_passes() {
    let dir = TempDir::new().unwrap();
    let output = khouse(dir.path(), &["catalog", "check"]);

    assert!(output.status.success());
    let text = stdout(&output);
    for code in ["th", "en", "jp", "cn", "ar"] {
        assert!(text.contains(code), "missing {code}");
    }
    assert!(text.contains("Catalog is consistent"));
}

#[test]
fn test_serve_without_config_exits_with_hint() {
    let dir = TempDir::new().unwrap();
    let output = khouse(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(stdout(&output).contains("khouse-server init"));
}
