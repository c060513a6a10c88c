//! Integration tests for CLI argument handling
//!
//! Tests the one-shot lookup, listing and logging flags against the built
//! binary. The dashboard itself is covered by unit tests.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cityweather"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute cityweather")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cityweather"), "Help should mention cityweather");
    assert!(stdout.contains("--city"), "Help should mention --city flag");
}

#[test]
fn test_city_lookup_prints_report() {
    let output = run_cli(&["--city", "london"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("London, GB"), "Unexpected output: {}", stdout);
    assert!(stdout.contains("15°C (feels like 13°C)"));
    assert!(stdout.contains("65%"));
}

#[test]
fn test_city_lookup_is_case_and_whitespace_insensitive() {
    let plain = run_cli(&["--city", "new york"]);
    let shouted = run_cli(&["--city", "  NEW YORK  "]);
    assert!(plain.status.success());
    assert_eq!(plain.stdout, shouted.stdout);
}

#[test]
fn test_city_lookup_json() {
    let output = run_cli(&["--city", "Tokyo", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(value["location_name"], "Tokyo");
    assert_eq!(value["temperature_c"], 28);
    assert_eq!(value["condition_description"], "light rain");
}

#[test]
fn test_unknown_city_with_seed_is_reproducible() {
    let first = run_cli(&["--city", "Atlantis", "--seed", "42", "--json"]);
    let second = run_cli(&["--city", "Atlantis", "--seed", "42", "--json"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let value: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(value["location_name"], "Atlantis");
    assert_eq!(value["country_code"], "XX");
    let temperature = value["temperature_c"].as_i64().unwrap();
    assert!((5..=39).contains(&temperature));
}

#[test]
fn test_blank_city_prints_error_and_exits() {
    let output = run_cli(&["--city", "   "]);
    assert!(!output.status.success(), "Expected blank city to fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("city name is empty"),
        "Should print error message about the empty city: {}",
        stderr
    );
}

#[test]
fn test_delay_too_long_prints_error_and_exits() {
    let output = run_cli(&["--delay-ms", "60000", "--list"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid delay"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_list_prints_builtin_cities() {
    let output = run_cli(&["--list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let cities: Vec<&str> = stdout.lines().collect();
    assert_eq!(cities, vec!["London", "New York", "Tokyo", "Paris", "Sydney"]);
}

#[test]
fn test_log_file_records_lookup() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let log_path = temp_dir.path().join("cityweather.log");
    let log_arg = log_path.to_string_lossy().to_string();

    let output = run_cli(&["--city", "Paris", "--log-file", &log_arg]);
    assert!(output.status.success());

    let log = std::fs::read_to_string(&log_path).expect("Log file should exist");
    assert!(log.contains("Fetching weather data"), "Unexpected log: {}", log);
    assert!(log.contains("Weather data loaded"));
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use cityweather::cli::{Cli, OutputFormat, RunMode, StartupConfig};

    #[test]
    fn test_cli_no_args_opens_dashboard_on_london() {
        let cli = Cli::parse_from(["cityweather"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(
            config.mode,
            RunMode::Dashboard {
                initial_query: "London".to_string()
            }
        );
    }

    #[test]
    fn test_cli_city_flag_selects_lookup() {
        let cli = Cli::parse_from(["cityweather", "--city", "Sydney"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(
            config.mode,
            RunMode::Lookup {
                query: "Sydney".to_string(),
                format: OutputFormat::Text
            }
        );
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["cityweather", "--plan"]).is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["cityweather", "--seed", "abc"]).is_err());
    }
}
