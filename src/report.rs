//! Plain-text and JSON rendering for one-shot lookups

use crate::data::WeatherObservation;

/// Capitalizes every word, as the dashboard shows condition phrases
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(crate::data::synthetic::capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats an observation as a short multi-line report
pub fn render_text(observation: &WeatherObservation) -> String {
    format!(
        "{}, {}\n{}\nTemperature: {}°C (feels like {}°C)\nHumidity:    {}%\nWind speed:  {:.1} m/s\nVisibility:  {} km\nPressure:    {} hPa\n",
        observation.location_name,
        observation.country_code,
        title_case(&observation.condition_description),
        observation.temperature_c,
        observation.feels_like_c,
        observation.humidity_pct,
        observation.wind_speed_ms,
        observation.visibility_km,
        observation.pressure_hpa,
    )
}

/// Formats an observation as pretty-printed JSON
pub fn render_json(observation: &WeatherObservation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(observation)
}
