//! CLI smoke tests for the fruitdex-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and basic command functionality.

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

/// Helper to run the fruitdex-server binary with given arguments
fn run_fruitdex_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fruitdex-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute fruitdex-server")
}

/// Helper to run the fruitdex-server binary with timeout
async fn run_fruitdex_server_with_timeout(
    args: &[&str],
    timeout_duration: Duration,
) -> Result<std::process::Output, Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_fruitdex-server"));
    cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

    match timeout(timeout_duration, cmd.output()).await {
        Ok(result) => result.map_err(|e| e.into()),
        Err(elapsed) => Err(elapsed.into()),
    }
}

/// Write a minimal valid config rooted in the given temp dir and return its path.
fn write_config(temp_dir: &TempDir, database_url: &str) -> std::path::PathBuf {
    let home_dir = temp_dir.path().join("home");
    let config_path = temp_dir.path().join("config.yaml");

    let config_content = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 0

database:
  url: "{}"

logging:
  default:
    console_level: error
    file: ""
"#,
        home_dir.display(),
        database_url
    );

    std::fs::write(&config_path, config_content).expect("Failed to write config file");
    config_path
}

#[test]
fn test_cli_help_command() {
    let output = run_fruitdex_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("fruitdex-server") || stdout.contains("Fruitdex"),
        "Should contain binary name"
    );
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(
        stdout.contains("check"),
        "Should contain 'check' subcommand"
    );
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_fruitdex_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("fruitdex-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_fruitdex_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid") || stderr.contains("unexpected"),
        "Should contain error message about invalid command"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_fruitdex_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not found"),
        "Should mention the missing config file: {}",
        stderr
    );
}

#[test]
fn test_cli_config_flag_short_form() {
    let output = run_fruitdex_server(&["-c", "/nonexistent/config.yaml", "check"]);

    assert!(
        !output.status.success(),
        "Should fail with missing config file"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not found"),
        "Should mention the missing config file with short flag: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");

    // Write invalid YAML
    std::fs::write(&config_path, "invalid: yaml: content: [unclosed")
        .expect("Failed to write file");

    let output = run_fruitdex_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config"),
        "Should mention the config extraction failure: {}",
        stderr
    );
}

#[test]
fn test_cli_check_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "sqlite://data/test.db?mode=rwc");

    let output = run_fruitdex_server(&["--config", config_path.to_str().unwrap(), "check"]);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        eprintln!("STDERR: {}", stderr);
        eprintln!("STDOUT: {}", stdout);
    }

    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration check passed"),
        "Should report a passed check: {}",
        stdout
    );
    assert!(stdout.contains("server:"), "Should echo the server section");
}

#[test]
fn test_cli_print_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "sqlite://data/test.db?mode=rwc");

    let output = run_fruitdex_server(&["--config", config_path.to_str().unwrap(), "--print-config"]);

    assert!(output.status.success(), "print-config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("server:"), "Should print the server section");
    assert!(
        stdout.contains("fruit_catalog:"),
        "Should print the module section"
    );
}

#[test]
fn test_cli_run_rejects_unsupported_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "mysql://localhost/nonexistent");

    let output = run_fruitdex_server(&["--config", config_path.to_str().unwrap(), "run"]);

    assert!(
        !output.status.success(),
        "Should fail fast on an unsupported DSN scheme"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported database type"),
        "Should name the unsupported backend: {}",
        stderr
    );
}

#[test]
fn test_cli_run_requires_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let home_dir = temp_dir.path().join("home");
    let config_path = temp_dir.path().join("no-database.yaml");

    let config_content = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 0
"#,
        home_dir.display()
    );
    std::fs::write(&config_path, config_content).expect("Failed to write config file");

    let output = run_fruitdex_server(&["--config", config_path.to_str().unwrap(), "run"]);

    assert!(
        !output.status.success(),
        "Should fail without a database section"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Database configuration is required"),
        "Should explain the missing database section: {}",
        stderr
    );
}

#[tokio::test]
async fn test_cli_run_command_with_mock_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // The config points at PostgreSQL; --mock must override it
    let config_path = write_config(&temp_dir, "postgres://localhost/nonexistent");

    // Port 0 lets the OS pick a free port so parallel test runs don't collide
    let result = run_fruitdex_server_with_timeout(
        &[
            "--config",
            config_path.to_str().unwrap(),
            "--mock",
            "run",
        ],
        Duration::from_secs(10),
    )
    .await;

    match result {
        Err(err) => {
            // Timeout is expected - server was running
            if err.to_string().contains("elapsed") {
                println!("Server started successfully (timed out as expected)");
            } else {
                eprintln!("Server failed to start: {}", err);
                panic!("Server should start successfully");
            }
        }
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);

            if output.status.success() {
                println!("Server completed successfully");
            } else {
                eprintln!("Server failed to start:");
                eprintln!("STDOUT: {}", stdout);
                eprintln!("STDERR: {}", stderr);
                panic!("Server should start successfully");
            }
        }
    }
}

#[test]
fn test_cli_mock_flag_with_check() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // PostgreSQL config that is never connected to by `check`
    let config_path = write_config(&temp_dir, "postgresql://localhost/nonexistent");

    let output =
        run_fruitdex_server(&["--config", config_path.to_str().unwrap(), "--mock", "check"]);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        eprintln!("STDERR: {}", stderr);
        eprintln!("STDOUT: {}", stdout);
    }

    assert!(
        output.status.success(),
        "Should succeed with mock database even if PostgreSQL config is invalid"
    );
}

#[test]
fn test_cli_verbose_flag() {
    let output = run_fruitdex_server(&["--verbose", "--help"]);

    assert!(output.status.success(), "Verbose help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should still contain usage information"
    );
}

#[test]
fn test_cli_subcommand_help() {
    let output = run_fruitdex_server(&["run", "--help"]);

    assert!(
        output.status.success(),
        "Run subcommand help should succeed"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("run") || stdout.contains("server"),
        "Should contain information about run command"
    );

    let output = run_fruitdex_server(&["check", "--help"]);

    assert!(
        output.status.success(),
        "Check subcommand help should succeed"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("check") || stdout.contains("configuration"),
        "Should contain information about check command"
    );
}
