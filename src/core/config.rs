//! Field limits for card entry.
//!
//! `TrunfoConfig` carries every numeric bound the validators enforce.
//! The defaults are the limits of the standard game; tests and embedders
//! can narrow them with the `with_*` builders.

use serde::{Deserialize, Serialize};

/// Inclusive range accepted for a numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Create new bounds.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`, or if either bound is NaN.
    pub fn new(min: T, max: T) -> Self {
        assert!(min <= max, "Bounds min must not exceed max");
        Self { min, max }
    }

    /// Check whether `value` lies within `[min, max]`.
    ///
    /// Incomparable values (NaN) are never contained.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Limits applied while collecting a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrunfoConfig {
    /// Inhabitants.
    pub population: Bounds<i64>,

    /// Square kilometers.
    pub area_km2: Bounds<f64>,

    /// Billions of currency units.
    pub gdp_billions: Bounds<f64>,

    /// Minimum city name length, in characters.
    pub name_min_len: usize,

    /// Maximum city name length, in characters.
    pub name_max_len: usize,
}

impl Default for TrunfoConfig {
    fn default() -> Self {
        Self {
            population: Bounds::new(1, 2_000_000_000),
            area_km2: Bounds::new(0.01, 30_000_000.0),
            gdp_billions: Bounds::new(0.001, 1_000_000.0),
            name_min_len: 2,
            name_max_len: 63,
        }
    }
}

impl TrunfoConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population bounds.
    #[must_use]
    pub fn with_population(mut self, min: i64, max: i64) -> Self {
        self.population = Bounds::new(min, max);
        self
    }

    /// Set the area bounds.
    #[must_use]
    pub fn with_area(mut self, min: f64, max: f64) -> Self {
        self.area_km2 = Bounds::new(min, max);
        self
    }

    /// Set the GDP bounds.
    #[must_use]
    pub fn with_gdp(mut self, min: f64, max: f64) -> Self {
        self.gdp_billions = Bounds::new(min, max);
        self
    }

    /// Set the accepted name length range.
    #[must_use]
    pub fn with_name_len(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "Name min length must not exceed max");
        self.name_min_len = min;
        self.name_max_len = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = TrunfoConfig::default();

        assert_eq!(config.population, Bounds::new(1, 2_000_000_000));
        assert_eq!(config.area_km2.min, 0.01);
        assert_eq!(config.area_km2.max, 30_000_000.0);
        assert_eq!(config.gdp_billions.min, 0.001);
        assert_eq!(config.gdp_billions.max, 1_000_000.0);
        assert_eq!(config.name_min_len, 2);
        assert_eq!(config.name_max_len, 63);
    }

    #[test]
    fn test_bounds_inclusive() {
        let bounds = Bounds::new(1, 5);
        assert!(bounds.contains(1));
        assert!(bounds.contains(5));
        assert!(!bounds.contains(0));
        assert!(!bounds.contains(6));
    }

    #[test]
    fn test_bounds_reject_nan() {
        let bounds = Bounds::new(0.01, 10.0);
        assert!(!bounds.contains(f64::NAN));
        assert!(!bounds.contains(f64::INFINITY));
    }

    #[test]
    #[should_panic(expected = "Bounds min must not exceed max")]
    fn test_bounds_inverted() {
        Bounds::new(5, 1);
    }

    #[test]
    fn test_config_builder() {
        let config = TrunfoConfig::new()
            .with_population(10, 100)
            .with_area(1.0, 2.0)
            .with_gdp(0.5, 0.75)
            .with_name_len(3, 8);

        assert_eq!(config.population, Bounds::new(10, 100));
        assert_eq!(config.area_km2, Bounds::new(1.0, 2.0));
        assert_eq!(config.gdp_billions, Bounds::new(0.5, 0.75));
        assert_eq!((config.name_min_len, config.name_max_len), (3, 8));
    }

    #[test]
    fn test_config_serialization() {
        let config = TrunfoConfig::default().with_population(1, 1000);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TrunfoConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
