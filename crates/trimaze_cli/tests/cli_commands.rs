//! Integration tests for configuration and JSON output

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Helper to create a command for the trimaze CLI
fn trimaze_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_trimaze"))
}

/// Helper to get fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout should be JSON")
}

mod json_output {
    use super::*;

    #[test]
    fn validate_reports_violation() {
        let output = trimaze_cmd()
            .arg("--format")
            .arg("json")
            .arg("validate")
            .arg(fixtures_dir().join("inconsistent.txt"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output.stdout);
        assert_eq!(json["valid"], false);
        assert_eq!(json["violation"]["kind"], "right-mismatch");
        assert_eq!(json["violation"]["position"]["row"], 1);
        assert_eq!(json["violation"]["position"]["col"], 1);
    }

    #[test]
    fn validate_reports_malformed_mask() {
        let output = trimaze_cmd()
            .args(["validate", "-", "--format", "json"])
            .write_stdin("1 2\n0 9\n")
            .output()
            .unwrap();

        let json = stdout_json(&output.stdout);
        assert_eq!(json["valid"], false);
        assert_eq!(json["violation"]["kind"], "malformed-cell");
        assert_eq!(json["violation"]["mask"], 9);
    }

    #[test]
    fn validate_valid_maze_has_null_violation() {
        let output = trimaze_cmd()
            .args(["validate", "--format", "json"])
            .arg(fixtures_dir().join("open.txt"))
            .output()
            .unwrap();

        let json = stdout_json(&output.stdout);
        assert_eq!(json["valid"], true);
        assert!(json["violation"].is_null());
    }

    #[test]
    fn trace_lists_path_and_exit() {
        let output = trimaze_cmd()
            .args(["rpath", "1", "1", "--format", "json"])
            .arg(fixtures_dir().join("open.txt"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output.stdout);
        assert_eq!(json["hand"], "right");
        assert_eq!(
            json["path"],
            serde_json::json!([
                { "row": 1, "col": 1 },
                { "row": 1, "col": 2 },
                { "row": 2, "col": 2 },
                { "row": 2, "col": 1 },
            ])
        );
        assert_eq!(json["exit"], serde_json::json!({ "row": 2, "col": 0 }));
        assert!(json["error"].is_null());
    }

    #[test]
    fn trace_reports_error_instead_of_exit() {
        let output = trimaze_cmd()
            .args(["lpath", "1", "1", "--detect-cycles", "--format", "json"])
            .arg(fixtures_dir().join("loop.txt"))
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));

        let json = stdout_json(&output.stdout);
        assert_eq!(json["hand"], "left");
        assert!(json["exit"].is_null());
        assert!(json["error"].as_str().unwrap().contains("cycles forever"));
    }

    #[test]
    fn trace_of_endless_walk_still_closes_document() {
        let output = trimaze_cmd()
            .args(["rpath", "1", "1", "--format", "json"])
            .arg(fixtures_dir().join("loop.txt"))
            .timeout(Duration::from_secs(10))
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));

        let json = stdout_json(&output.stdout);
        assert_eq!(
            json["path"],
            serde_json::json!([
                { "row": 1, "col": 1 },
                { "row": 1, "col": 2 },
                { "row": 1, "col": 1 },
            ])
        );
        assert!(json["exit"].is_null());
        assert_eq!(
            json["error"],
            "Walk cycles forever after re-entering cell 1,2"
        );
    }
}

mod config_file {
    use super::*;

    #[test]
    fn discovered_config_sets_hand() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".trimaze.json"), r#"{ "hand": "left" }"#).unwrap();
        fs::copy(fixtures_dir().join("open.txt"), temp_dir.path().join("open.txt")).unwrap();

        trimaze_cmd()
            .current_dir(temp_dir.path())
            .args(["trace", "1", "1", "open.txt"])
            .assert()
            .success()
            .stdout("1,1\n")
            .stderr(predicate::str::contains("Using config"));
    }

    #[test]
    fn command_line_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("maze.json");
        fs::write(&config_path, r#"{ "hand": "left", "format": "json" }"#).unwrap();

        trimaze_cmd()
            .arg("--config")
            .arg(&config_path)
            .args(["trace", "1", "1", "--hand", "right", "--format", "text"])
            .arg(fixtures_dir().join("open.txt"))
            .assert()
            .success()
            .stdout("1,1\n1,2\n2,2\n2,1\n");
    }

    #[test]
    fn config_step_limit_applies() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("maze.json");
        fs::write(&config_path, r#"{ "max_steps": 2 }"#).unwrap();

        trimaze_cmd()
            .arg("--config")
            .arg(&config_path)
            .args(["rpath", "1", "1"])
            .arg(fixtures_dir().join("loop.txt"))
            .assert()
            .code(1)
            .stdout("1,1\n1,2\n");
    }

    #[test]
    fn rejects_unknown_config_keys() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("maze.json");
        fs::write(&config_path, r#"{ "shortest": true }"#).unwrap();

        trimaze_cmd()
            .arg("--config")
            .arg(&config_path)
            .arg("validate")
            .arg(fixtures_dir().join("open.txt"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Config validation failed"));
    }
}
