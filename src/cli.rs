//! Command-line interface parsing for City Weather CLI
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated [`StartupConfig`] that decides between the interactive
//! dashboard, a one-shot lookup and the city listing.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// City looked up when the dashboard starts
pub const DEFAULT_INITIAL_CITY: &str = "London";

/// Simulated loading delay for dashboard searches
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Largest accepted `--delay-ms`
pub const MAX_DELAY_MS: u64 = 10_000;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested loading delay is longer than allowed
    #[error("Invalid delay: {0}ms exceeds the maximum of 10000ms")]
    DelayTooLong(u64),
}

/// City Weather CLI - Look up current conditions by city name
#[derive(Parser, Debug)]
#[command(name = "cityweather")]
#[command(about = "Simulated current weather conditions for any city")]
#[command(version)]
pub struct Cli {
    /// Look up a single city, print the conditions and exit
    ///
    /// Examples:
    ///   cityweather --city london          # Built-in demo data
    ///   cityweather --city atlantis        # Generated data for an unknown city
    ///   cityweather --city tokyo --json    # Machine-readable output
    #[arg(long, value_name = "CITY")]
    pub city: Option<String>,

    /// Print the --city result as JSON
    #[arg(long, requires = "city")]
    pub json: bool,

    /// City searched when the dashboard opens
    #[arg(long, value_name = "CITY", default_value = DEFAULT_INITIAL_CITY)]
    pub initial: String,

    /// Seed for generated weather, making unknown cities reproducible
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Simulated loading delay for dashboard searches, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// List the cities with built-in demo data and exit
    #[arg(long, conflicts_with = "city")]
    pub list: bool,

    /// Write log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Output format for one-shot lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the binary should do after parsing arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Open the terminal dashboard and search `initial_query` right away
    Dashboard { initial_query: String },
    /// Resolve one query, print it and exit
    Lookup { query: String, format: OutputFormat },
    /// Print the built-in cities and exit
    ListCities,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Selected front end
    pub mode: RunMode,
    /// Seed for the synthetic weather generator, if fixed
    pub seed: Option<u64>,
    /// Simulated loading delay for dashboard searches
    pub delay: Duration,
    /// Optional log destination
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Dashboard {
                initial_query: DEFAULT_INITIAL_CITY.to_string(),
            },
            seed: None,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            log_file: None,
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if a flag value is out of range
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.delay_ms > MAX_DELAY_MS {
            return Err(CliError::DelayTooLong(cli.delay_ms));
        }

        let mode = if cli.list {
            RunMode::ListCities
        } else if let Some(query) = &cli.city {
            RunMode::Lookup {
                query: query.clone(),
                format: if cli.json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                },
            }
        } else {
            RunMode::Dashboard {
                initial_query: cli.initial.clone(),
            }
        };

        Ok(StartupConfig {
            mode,
            seed: cli.seed,
            delay: Duration::from_millis(cli.delay_ms),
            log_file: cli.log_file.clone(),
        })
    }

    /// Whether the terminal dashboard will own the screen
    pub fn is_interactive(&self) -> bool {
        matches!(self.mode, RunMode::Dashboard { .. })
    }
}
