//! Built-in city catalog
//!
//! This module contains the static table of cities with fixed demo
//! conditions, and the [`Catalog`] map the resolver looks queries up in.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::resolver::normalize_query;
use super::WeatherObservation;

/// Static array of the cities with fixed demo conditions
pub static BUILTIN_CITIES: [WeatherObservation; 5] = [
    WeatherObservation {
        location_name: Cow::Borrowed("London"),
        country_code: Cow::Borrowed("GB"),
        temperature_c: 15,
        feels_like_c: 13,
        condition_description: Cow::Borrowed("partly cloudy"),
        condition_icon: Cow::Borrowed("02d"),
        humidity_pct: 65,
        wind_speed_ms: 3.2,
        visibility_km: 10,
        pressure_hpa: 1013,
    },
    WeatherObservation {
        location_name: Cow::Borrowed("New York"),
        country_code: Cow::Borrowed("US"),
        temperature_c: 22,
        feels_like_c: 24,
        condition_description: Cow::Borrowed("clear sky"),
        condition_icon: Cow::Borrowed("01d"),
        humidity_pct: 45,
        wind_speed_ms: 2.1,
        visibility_km: 16,
        pressure_hpa: 1020,
    },
    WeatherObservation {
        location_name: Cow::Borrowed("Tokyo"),
        country_code: Cow::Borrowed("JP"),
        temperature_c: 28,
        feels_like_c: 31,
        condition_description: Cow::Borrowed("light rain"),
        condition_icon: Cow::Borrowed("10d"),
        humidity_pct: 78,
        wind_speed_ms: 1.5,
        visibility_km: 8,
        pressure_hpa: 1008,
    },
    WeatherObservation {
        location_name: Cow::Borrowed("Paris"),
        country_code: Cow::Borrowed("FR"),
        temperature_c: 18,
        feels_like_c: 17,
        condition_description: Cow::Borrowed("overcast clouds"),
        condition_icon: Cow::Borrowed("04d"),
        humidity_pct: 72,
        wind_speed_ms: 2.8,
        visibility_km: 12,
        pressure_hpa: 1015,
    },
    WeatherObservation {
        location_name: Cow::Borrowed("Sydney"),
        country_code: Cow::Borrowed("AU"),
        temperature_c: 25,
        feels_like_c: 26,
        condition_description: Cow::Borrowed("few clouds"),
        condition_icon: Cow::Borrowed("02d"),
        humidity_pct: 58,
        wind_speed_ms: 4.1,
        visibility_km: 15,
        pressure_hpa: 1018,
    },
];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let mut catalog = Catalog::new();
    for observation in &BUILTIN_CITIES {
        catalog.insert(&observation.location_name, observation.clone());
    }
    catalog
});

/// Immutable lookup table from normalized city name to observation
///
/// Keys are normalized on insert and on lookup, so matching is exact on the
/// lowercased, trimmed name. Insertion order is remembered for listing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<WeatherObservation>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide catalog built from [`BUILTIN_CITIES`]
    ///
    /// # Example
    ///
    /// ```
    /// use cityweather::data::Catalog;
    ///
    /// let london = Catalog::builtin().get("London").unwrap();
    /// assert_eq!(london.country_code, "GB");
    /// ```
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Adds or replaces the entry stored under `key`
    pub fn insert(&mut self, key: &str, observation: WeatherObservation) {
        let key = normalize_query(key);
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot] = observation,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(observation);
            }
        }
    }

    /// Looks up a city by name
    ///
    /// # Returns
    ///
    /// Returns `Some(&WeatherObservation)` if the normalized name is present,
    /// `None` otherwise. Partial names never match.
    pub fn get(&self, name: &str) -> Option<&WeatherObservation> {
        self.index
            .get(&normalize_query(name))
            .map(|&slot| &self.entries[slot])
    }

    /// Display names of all entries in insertion order
    pub fn city_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|observation| observation.location_name.as_ref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
