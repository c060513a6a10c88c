//! Application state management for City Weather CLI
//!
//! This module contains the dashboard state, handling keyboard input, the
//! simulated loading delay and the transitions between idle, loading and
//! result views.

use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;

use crate::cli::StartupConfig;
use crate::data::{
    validate_query, Catalog, RandomSource, ResolveError, WeatherObservation, WeatherResolver,
};

/// Resolves a query and logs around it
///
/// Shared by the dashboard and the one-shot lookup so both log the same way.
pub fn run_query<R: RandomSource>(
    resolver: &mut WeatherResolver<'_, R>,
    query: &str,
) -> Result<WeatherObservation, ResolveError> {
    tracing::info!(query, "Fetching weather data");
    match resolver.resolve(query) {
        Ok(observation) => {
            tracing::info!(
                location = %observation.location_name,
                synthetic = observation.is_synthetic(),
                "Weather data loaded"
            );
            Ok(observation)
        }
        Err(err) => {
            tracing::warn!(query, error = %err, "Weather lookup rejected");
            Err(err)
        }
    }
}

/// Builds the resolver a startup configuration asks for
pub fn resolver_for(config: &StartupConfig) -> WeatherResolver<'static, StdRng> {
    match config.seed {
        Some(seed) => WeatherResolver::seeded(Catalog::builtin(), seed),
        None => WeatherResolver::from_os_rng(Catalog::builtin()),
    }
}

/// Dashboard state enum representing what the body of the screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Nothing searched yet
    Idle,
    /// A search is in flight
    Loading,
    /// The last search produced an observation
    Ready,
}

/// Main application struct managing state and data
pub struct App {
    /// Current dashboard state
    pub state: AppState,
    /// Text in the search box
    pub input: String,
    /// Last resolved observation
    pub observation: Option<WeatherObservation>,
    /// Message shown under the search box
    pub error: Option<String>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Timestamp of the last successful search
    pub last_updated: Option<DateTime<Local>>,
    /// Query waiting for the event loop to run it
    pending_query: Option<String>,
    /// Artificial delay applied before each search completes
    delay: Duration,
    resolver: WeatherResolver<'static, StdRng>,
}

impl App {
    /// Creates a new App with the default startup configuration
    pub fn new() -> Self {
        Self::with_startup_config(&StartupConfig::default())
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// The dashboard's initial query is queued straight away, so the first
    /// pass of the event loop performs the startup search.
    ///
    /// # Arguments
    /// * `config` - The startup configuration derived from CLI arguments
    pub fn with_startup_config(config: &StartupConfig) -> Self {
        let mut app = Self {
            state: AppState::Idle,
            input: String::new(),
            observation: None,
            error: None,
            should_quit: false,
            show_help: false,
            last_updated: None,
            pending_query: None,
            delay: config.delay,
            resolver: resolver_for(config),
        };

        if let crate::cli::RunMode::Dashboard { initial_query } = &config.mode {
            if validate_query(initial_query).is_ok() {
                app.queue(initial_query.trim().to_string());
            }
        }

        app
    }

    /// Cities with built-in demo data, for the hint line
    pub fn known_cities(&self) -> Vec<&'static str> {
        self.resolver.catalog().city_names()
    }

    /// Whether a search is in flight
    pub fn is_loading(&self) -> bool {
        self.state == AppState::Loading
    }

    fn queue(&mut self, query: String) {
        self.pending_query = Some(query);
        self.error = None;
        self.state = AppState::Loading;
    }

    /// Takes the query queued by a submit, if any
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending_query.take()
    }

    /// Submits the search box contents
    ///
    /// Blank input is reported inline without starting a search; submits
    /// while a search is in flight are ignored.
    pub fn submit(&mut self) {
        if self.is_loading() {
            return;
        }
        match validate_query(&self.input) {
            Ok(query) => {
                let query = query.to_string();
                self.queue(query);
            }
            Err(err) => {
                tracing::debug!("Ignoring blank search");
                self.error = Some(format!("Enter a city name to search ({})", err));
            }
        }
    }

    /// Runs a queued search, waiting out the simulated delay first
    ///
    /// Transitions to `Ready` on success. A rejected query leaves the previous
    /// observation in place and records the error.
    pub async fn fetch(&mut self, query: &str) {
        self.state = AppState::Loading;
        self.error = None;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match run_query(&mut self.resolver, query) {
            Ok(observation) => {
                self.observation = Some(observation);
                self.last_updated = Some(Local::now());
                self.state = AppState::Ready;
            }
            Err(err) => {
                self.error = Some(format!("Failed to fetch weather data: {}", err));
                self.state = if self.observation.is_some() {
                    AppState::Ready
                } else {
                    AppState::Idle
                };
            }
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Arguments
    /// * `key_event` - The keyboard event to handle
    ///
    /// # Key Bindings
    /// - Printable characters: edit the search box
    /// - `Backspace`: delete the last character
    /// - `Enter`: search for the typed city
    /// - `Esc`: clear the search box, or quit when it is already empty
    /// - `Ctrl-C`: quit
    /// - `F1`: toggle the help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return;
        }

        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        match key_event.code {
            KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::Esc => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.error = None;
                }
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
