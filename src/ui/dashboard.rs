//! Dashboard screen rendering
//!
//! Renders the search box, the current conditions card and the details row
//! for the last looked-up city, plus loading and error states.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, AppState};
use crate::data::WeatherObservation;
use crate::report::title_case;

/// Icon code to pictogram mapping
///
/// Only the two-digit condition prefix matters; the day/night suffix is
/// ignored.
pub fn icon_glyph(code: &str) -> &'static str {
    match code.get(..2) {
        Some("01") => "\u{2600}",  // ☀
        Some("02") => "\u{26C5}",  // ⛅
        Some("03") | Some("04") => "\u{2601}", // ☁
        Some("09") => "\u{1F327}", // 🌧
        Some("10") => "\u{1F326}", // 🌦
        Some("11") => "\u{26C8}",  // ⛈
        Some("13") => "\u{2744}",  // ❄
        Some("50") => "\u{1F32B}", // 🌫
        _ => "?",
    }
}

/// Color for temperature (warmer = more red, cooler = more blue)
fn temperature_color(temp: i32) -> Color {
    if temp >= 30 {
        Color::Red
    } else if temp >= 25 {
        Color::LightRed
    } else if temp >= 20 {
        Color::Yellow
    } else if temp >= 15 {
        Color::Green
    } else if temp >= 10 {
        Color::Cyan
    } else {
        Color::Blue
    }
}

/// Renders the full dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Error line
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_search(frame, chunks[1], app);
    render_error(frame, chunks[2], app);

    match app.state {
        AppState::Loading => render_loading(frame, chunks[3]),
        AppState::Ready | AppState::Idle => match &app.observation {
            Some(observation) => render_observation(frame, chunks[3], observation),
            None => render_empty(frame, chunks[3]),
        },
    }

    render_footer(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            "Weather Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Current weather information for any city",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Demo Mode - Try: {}", app.known_cities().join(", ")),
            Style::default().fg(Color::Yellow),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.is_loading() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let line = if app.input.is_empty() {
        Line::from(vec![
            Span::styled("\u{258F}", Style::default().fg(Color::Cyan)),
            Span::styled("Enter city name...", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw(app.input.clone()),
            Span::styled("\u{258F}", Style::default().fg(Color::Cyan)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_error(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(error) = &app.error {
        let text = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(text, area);
    }
}

/// Renders a loading message while a search is in flight
fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading weather data...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new("Search for a city to see current conditions")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

fn render_observation(frame: &mut Frame, area: Rect, observation: &WeatherObservation) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let title = format!(
        " {}, {} ",
        observation.location_name, observation.country_code
    );
    let card = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(Span::styled(
            title_case(&observation.condition_description),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("{}  ", icon_glyph(&observation.condition_icon))),
            Span::styled(
                format!("{}°C", observation.temperature_c),
                Style::default()
                    .fg(temperature_color(observation.temperature_c))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Feels like {}°C", observation.feels_like_c),
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(card).alignment(Alignment::Center),
        chunks[0],
    );

    let details = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[1]);

    let tiles = [
        ("Humidity", format!("{}%", observation.humidity_pct), Color::Blue),
        ("Wind Speed", format!("{:.1} m/s", observation.wind_speed_ms), Color::Green),
        ("Visibility", format!("{} km", observation.visibility_km), Color::Magenta),
        ("Pressure", format!("{} hPa", observation.pressure_hpa), Color::LightRed),
    ];

    for ((label, value, color), tile_area) in tiles.into_iter().zip(details.iter()) {
        render_tile(frame, *tile_area, label, value, color);
    }
}

fn render_tile(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Paragraph::new(Span::styled(
        value,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Simulated weather data for demonstration",
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(updated) = app.last_updated {
        spans.push(Span::styled(
            format!(" | Updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans.push(Span::styled(
        " | F1 help",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
