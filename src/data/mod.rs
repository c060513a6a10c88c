//! Core data models for City Weather CLI
//!
//! This module contains the weather observation type along with the built-in
//! city catalog, the synthetic fallback generator and the resolver that ties
//! them together.

pub mod catalog;
pub mod resolver;
pub mod synthetic;

pub use catalog::Catalog;
pub use resolver::{normalize_query, validate_query, ResolveError, WeatherResolver};
pub use synthetic::{RandomSource, UNKNOWN_COUNTRY};

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Current conditions for a single place
///
/// String fields are `Cow<'static, str>` so the built-in catalog can be
/// declared as a static array while synthetic observations own their text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Display name of the place
    pub location_name: Cow<'static, str>,
    /// Two-letter country code, or [`UNKNOWN_COUNTRY`] for synthetic entries
    pub country_code: Cow<'static, str>,
    /// Temperature in Celsius
    pub temperature_c: i32,
    /// Feels-like temperature in Celsius
    pub feels_like_c: i32,
    /// Short lowercase phrase such as "light rain"
    pub condition_description: Cow<'static, str>,
    /// Pictogram code such as "02d"
    pub condition_icon: Cow<'static, str>,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: u8,
    /// Wind speed in m/s, one decimal place
    pub wind_speed_ms: f64,
    /// Visibility in kilometres
    pub visibility_km: u32,
    /// Atmospheric pressure in hPa
    pub pressure_hpa: u32,
}

impl WeatherObservation {
    /// Whether this observation came from the fallback generator
    pub fn is_synthetic(&self) -> bool {
        self.country_code == UNKNOWN_COUNTRY
    }
}
