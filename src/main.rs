//! City Weather CLI - Look up current conditions by city name
//!
//! A terminal dashboard that searches simulated weather data for any city,
//! with a one-shot mode for scripts.

use std::error::Error;
use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cityweather::app::{self, App};
use cityweather::cli::{Cli, OutputFormat, RunMode, StartupConfig};
use cityweather::data::Catalog;
use cityweather::logging::{self, LogTarget};
use cityweather::{report, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Resolves a single query and prints the report
fn run_lookup(
    config: &StartupConfig,
    query: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let mut resolver = app::resolver_for(config);
    let observation = app::run_query(&mut resolver, query)?;

    match format {
        OutputFormat::Text => print!("{}", report::render_text(&observation)),
        OutputFormat::Json => println!("{}", report::render_json(&observation)?),
    }
    Ok(())
}

/// Drives the dashboard until the user quits
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Run a queued search; the loading view is already on screen
        if let Some(query) = app.take_pending() {
            app.fetch(&query).await;
            continue;
        }

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

async fn run_dashboard(config: &StartupConfig) -> Result<(), Box<dyn Error>> {
    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_startup_config(config);
    let result = event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = StartupConfig::from_cli(&cli)?;
    logging::init(LogTarget::select(
        config.log_file.as_deref(),
        config.is_interactive(),
    ))?;

    match &config.mode {
        RunMode::ListCities => {
            for name in Catalog::builtin().city_names() {
                println!("{}", name);
            }
            Ok(())
        }
        RunMode::Lookup { query, format } => run_lookup(&config, query, *format),
        RunMode::Dashboard { .. } => run_dashboard(&config).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
