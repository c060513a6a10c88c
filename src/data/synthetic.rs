//! Synthetic weather for cities missing from the catalog
//!
//! Every numeric field is drawn independently from a bounded range, and the
//! description and icon are picked independently of each other.

use std::borrow::Cow;

use rand::{Rng, RngCore};

use super::WeatherObservation;

/// Country code used for generated observations
pub const UNKNOWN_COUNTRY: &str = "XX";

/// Condition phrases available to the generator, in pick order
pub const DESCRIPTIONS: [&str; 9] = [
    "clear sky",
    "few clouds",
    "scattered clouds",
    "broken clouds",
    "shower rain",
    "rain",
    "thunderstorm",
    "snow",
    "mist",
];

/// Icon codes available to the generator, in pick order
pub const ICONS: [&str; 9] = [
    "01d", "02d", "03d", "04d", "09d", "10d", "11d", "13d", "50d",
];

/// Source of uniform values in `[0, 1)`
///
/// Any `rand` generator works; tests can supply a fixed sequence to pin the
/// generated observation exactly.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

fn unit(rng: &mut impl RandomSource) -> f64 {
    rng.next_unit().clamp(0.0, 1.0)
}

/// Draws an integer in `base..base + span`
fn draw_int(rng: &mut impl RandomSource, span: u32, base: i32) -> i32 {
    let offset = (unit(rng) * f64::from(span)).floor() as i32;
    base + offset.min(span as i32 - 1)
}

fn pick<'a>(rng: &mut impl RandomSource, choices: &[&'a str]) -> &'a str {
    let slot = draw_int(rng, choices.len() as u32, 0) as usize;
    choices[slot]
}

/// Upper-cases the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generates an observation for a city the catalog does not know
///
/// `query` should already be trimmed; it becomes the display name with its
/// first character upper-cased.
pub fn generate(query: &str, rng: &mut impl RandomSource) -> WeatherObservation {
    let temperature_c = draw_int(rng, 35, 5);
    let condition_description = pick(rng, &DESCRIPTIONS);
    let condition_icon = pick(rng, &ICONS);
    let humidity_pct = draw_int(rng, 40, 40) as u8;
    let wind_speed_ms = ((unit(rng) * 5.0 + 1.0) * 10.0).round() / 10.0;
    let visibility_km = draw_int(rng, 10, 5) as u32;
    let pressure_hpa = draw_int(rng, 50, 1000) as u32;
    let feels_like_c = temperature_c + draw_int(rng, 6, -3);

    WeatherObservation {
        location_name: Cow::Owned(capitalize_first(query)),
        country_code: Cow::Borrowed(UNKNOWN_COUNTRY),
        temperature_c,
        feels_like_c,
        condition_description: Cow::Borrowed(condition_description),
        condition_icon: Cow::Borrowed(condition_icon),
        humidity_pct,
        wind_speed_ms,
        visibility_km,
        pressure_hpa,
    }
}

/// Replays a fixed list of unit values, cycling when exhausted
#[cfg(test)]
pub(crate) struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl FixedSequence {
    pub(crate) fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
