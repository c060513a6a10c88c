//! City name to weather observation resolution
//!
//! Queries are trimmed and lowercased before being looked up in a
//! [`Catalog`]. Unknown cities fall back to a synthetic observation, so once
//! a query passes the emptiness check resolution always succeeds.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::catalog::Catalog;
use super::synthetic::{self, RandomSource};
use super::WeatherObservation;

/// Errors that can occur when resolving a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The query was empty or whitespace only
    #[error("city name is empty")]
    EmptyQuery,
}

/// Trims `raw` and rejects it if nothing is left
///
/// # Returns
/// * `Ok(&str)` with the trimmed query
/// * `Err(ResolveError::EmptyQuery)` for blank input
pub fn validate_query(raw: &str) -> Result<&str, ResolveError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::EmptyQuery);
    }
    Ok(trimmed)
}

/// Lowercases and trims a city name into a catalog key
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolves free-text city names against a catalog
///
/// The catalog is shared by reference; the random source is owned, so each
/// resolver is independent of any other resolver on the same catalog.
#[derive(Debug)]
pub struct WeatherResolver<'c, R> {
    catalog: &'c Catalog,
    rng: R,
}

impl<'c, R: RandomSource> WeatherResolver<'c, R> {
    /// Creates a resolver over `catalog` using `rng` for unknown cities
    pub fn new(catalog: &'c Catalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    /// Maps a raw query to an observation
    ///
    /// # Arguments
    /// * `raw_query` - Free text as typed by the user
    ///
    /// # Returns
    /// * `Ok(WeatherObservation)` - The catalog entry, or synthetic data for
    ///   an unknown city
    /// * `Err(ResolveError::EmptyQuery)` - If the trimmed query is empty
    ///
    /// # Example
    ///
    /// ```
    /// use cityweather::data::{Catalog, WeatherResolver};
    ///
    /// let mut resolver = WeatherResolver::seeded(Catalog::builtin(), 7);
    /// let tokyo = resolver.resolve(" TOKYO ").unwrap();
    /// assert_eq!(tokyo.temperature_c, 28);
    /// ```
    pub fn resolve(&mut self, raw_query: &str) -> Result<WeatherObservation, ResolveError> {
        let query = validate_query(raw_query)?;
        let key = normalize_query(query);

        match self.catalog.get(&key) {
            Some(entry) => Ok(entry.clone()),
            None => Ok(synthetic::generate(query, &mut self.rng)),
        }
    }

    /// The catalog this resolver looks queries up in
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}

impl<'c> WeatherResolver<'c, StdRng> {
    /// Creates a resolver seeded from the operating system
    pub fn from_os_rng(catalog: &'c Catalog) -> Self {
        Self::new(catalog, StdRng::from_os_rng())
    }

    /// Creates a resolver whose synthetic observations are reproducible
    pub fn seeded(catalog: &'c Catalog, seed: u64) -> Self {
        Self::new(catalog, StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::BUILTIN_CITIES;
    use crate::data::synthetic::{FixedSequence, UNKNOWN_COUNTRY};

    fn resolver() -> WeatherResolver<'static, StdRng> {
        WeatherResolver::seeded(Catalog::builtin(), 1234)
    }

    fn assert_in_synthetic_ranges(o: &WeatherObservation) {
        assert!((5..=39).contains(&o.temperature_c), "temperature {}", o.temperature_c);
        assert!((40..=79).contains(&o.humidity_pct), "humidity {}", o.humidity_pct);
        assert!(o.humidity_pct <= 100);
        assert!(o.wind_speed_ms >= 0.0);
        assert!((1.0..=6.0).contains(&o.wind_speed_ms), "wind {}", o.wind_speed_ms);
        assert!(((o.wind_speed_ms * 10.0).round() / 10.0 - o.wind_speed_ms).abs() < 1e-9);
        assert!(o.visibility_km >= 1);
        assert!((5..=14).contains(&o.visibility_km), "visibility {}", o.visibility_km);
        assert!((1000..=1049).contains(&o.pressure_hpa), "pressure {}", o.pressure_hpa);
        assert!(o.feels_like_c >= o.temperature_c - 3);
        assert!(o.feels_like_c <= o.temperature_c + 2);
    }

    #[test]
    fn test_validate_query_trims() {
        assert_eq!(validate_query("  Oslo \n"), Ok("Oslo"));
        assert_eq!(validate_query(""), Err(ResolveError::EmptyQuery));
        assert_eq!(validate_query(" \t "), Err(ResolveError::EmptyQuery));
    }

    #[test]
    fn test_normalize_query_lowercases_and_trims() {
        assert_eq!(normalize_query("  New York "), "new york");
        assert_eq!(normalize_query("TOKYO"), "tokyo");
    }

    #[test]
    fn test_empty_query_fails() {
        let mut resolver = resolver();
        assert_eq!(resolver.resolve(""), Err(ResolveError::EmptyQuery));
        assert_eq!(resolver.resolve("   "), Err(ResolveError::EmptyQuery));
    }

    #[test]
    fn test_empty_query_does_not_consume_randomness() {
        let mut guarded = WeatherResolver::seeded(Catalog::builtin(), 99);
        let mut untouched = WeatherResolver::seeded(Catalog::builtin(), 99);

        assert!(guarded.resolve("  ").is_err());
        assert_eq!(
            guarded.resolve("Atlantis").unwrap(),
            untouched.resolve("Atlantis").unwrap()
        );
    }

    #[test]
    fn test_known_keys_ignore_case_and_whitespace() {
        let mut resolver = resolver();
        for entry in &BUILTIN_CITIES {
            let key = normalize_query(&entry.location_name);
            let plain = resolver.resolve(&key).unwrap();
            let upper = resolver.resolve(&key.to_uppercase()).unwrap();
            let padded = resolver.resolve(&format!(" {} ", key)).unwrap();

            assert_eq!(plain, upper, "{} upper-cased", key);
            assert_eq!(plain, padded, "{} padded", key);
            assert_eq!(&plain, entry);
        }
    }

    #[test]
    fn test_london_values() {
        let london = resolver().resolve("london").unwrap();
        assert_eq!(london.location_name, "London");
        assert_eq!(london.country_code, "GB");
        assert_eq!(london.temperature_c, 15);
        assert_eq!(london.humidity_pct, 65);
    }

    #[test]
    fn test_tokyo_values() {
        let tokyo = resolver().resolve("Tokyo").unwrap();
        assert_eq!(tokyo.temperature_c, 28);
        assert_eq!(tokyo.condition_description, "light rain");
    }

    #[test]
    fn test_unknown_city_is_synthesized() {
        let atlantis = resolver().resolve("Atlantis").unwrap();
        assert_eq!(atlantis.country_code, UNKNOWN_COUNTRY);
        assert_eq!(atlantis.location_name, "Atlantis");
        assert!(atlantis.is_synthetic());
        assert_in_synthetic_ranges(&atlantis);
    }

    #[test]
    fn test_unknown_city_name_is_trimmed_and_capitalized() {
        let observation = resolver().resolve("  atlantis  ").unwrap();
        assert_eq!(observation.location_name, "Atlantis");

        let observation = resolver().resolve("el dorado").unwrap();
        assert_eq!(observation.location_name, "El dorado");
    }

    #[test]
    fn test_repeated_unknown_lookups_stay_in_range() {
        let mut resolver = WeatherResolver::from_os_rng(Catalog::builtin());
        for _ in 0..200 {
            let observation = resolver.resolve("Atlantis").unwrap();
            assert_in_synthetic_ranges(&observation);
        }
    }

    #[test]
    fn test_repeated_unknown_lookups_vary() {
        let mut resolver = resolver();
        let first = resolver.resolve("Atlantis").unwrap();
        let differs = (0..50).any(|_| resolver.resolve("Atlantis").unwrap() != first);
        assert!(differs, "synthetic data should not be constant across calls");
    }

    #[test]
    fn test_same_seed_reproduces_synthetic_data() {
        let a = WeatherResolver::seeded(Catalog::builtin(), 5).resolve("Gotham").unwrap();
        let b = WeatherResolver::seeded(Catalog::builtin(), 5).resolve("Gotham").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_injected_source_pins_synthetic_data() {
        let mut resolver = WeatherResolver::new(Catalog::builtin(), FixedSequence::new(&[0.0]));
        let observation = resolver.resolve("atlantis").unwrap();

        assert_eq!(observation.temperature_c, 5);
        assert_eq!(observation.feels_like_c, 2);
        assert_eq!(observation.condition_description, "clear sky");
        assert_eq!(observation.pressure_hpa, 1000);
    }

    #[test]
    fn test_known_city_ignores_random_source() {
        let mut resolver = WeatherResolver::new(Catalog::builtin(), FixedSequence::new(&[0.9]));
        let paris = resolver.resolve("PARIS").unwrap();
        assert_eq!(paris.temperature_c, 18);
        assert_eq!(paris.condition_description, "overcast clouds");
    }

    #[test]
    fn test_injected_catalog_is_used() {
        let mut catalog = Catalog::new();
        let mut entry = BUILTIN_CITIES[0].clone();
        entry.location_name = "Atlantis".into();
        entry.country_code = "AT".into();
        catalog.insert("Atlantis", entry);

        let mut resolver = WeatherResolver::seeded(&catalog, 0);
        assert_eq!(resolver.resolve("atlantis").unwrap().country_code, "AT");
        assert!(resolver.resolve("london").unwrap().is_synthetic());
    }

    #[test]
    fn test_concurrent_resolvers_share_catalog() {
        let catalog = Catalog::builtin();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4u64)
                .map(|seed| {
                    scope.spawn(move || {
                        let mut resolver = WeatherResolver::seeded(catalog, seed);
                        let london = resolver.resolve("London").unwrap();
                        let unknown = resolver.resolve("Nowhere").unwrap();
                        (london, unknown)
                    })
                })
                .collect();

            for handle in handles {
                let (london, unknown) = handle.join().unwrap();
                assert_eq!(london.temperature_c, 15);
                assert_in_synthetic_ranges(&unknown);
            }
        });
    }
}
