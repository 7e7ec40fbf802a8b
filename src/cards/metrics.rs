//! Metrics derived from a card's raw fields.
//!
//! Computed on demand and never stored on the card.

use super::card::CityCard;

const BILLION: f64 = 1e9;

/// Inhabitants per square kilometer. Zero for a non-positive area.
#[must_use]
pub fn density(card: &CityCard) -> f64 {
    if card.area_km2 > 0.0 {
        card.population as f64 / card.area_km2
    } else {
        0.0
    }
}

/// GDP in currency units per inhabitant. Zero for a non-positive population.
#[must_use]
pub fn gdp_per_capita(card: &CityCard) -> f64 {
    if card.population <= 0 {
        return 0.0;
    }
    (card.gdp_billions * BILLION) / card.population as f64
}

impl CityCard {
    /// See [`density`].
    #[must_use]
    pub fn density(&self) -> f64 {
        density(self)
    }

    /// See [`gdp_per_capita`].
    #[must_use]
    pub fn gdp_per_capita(&self) -> f64 {
        gdp_per_capita(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CityName;

    fn card(population: i64, area_km2: f64, gdp_billions: f64) -> CityCard {
        CityCard::new(
            "A".parse().unwrap(),
            "A01".parse().unwrap(),
            CityName::new("Test", 2, 63).unwrap(),
            population,
            area_km2,
            gdp_billions,
        )
    }

    #[test]
    fn test_density() {
        assert_eq!(density(&card(1_000_000, 500.0, 1.0)), 2000.0);
        assert_eq!(card(2_000_000, 1000.0, 1.0).density(), 2000.0);
    }

    #[test]
    fn test_gdp_per_capita() {
        assert_eq!(gdp_per_capita(&card(1_000_000, 1.0, 10.0)), 10_000.0);
        assert_eq!(card(2_000_000, 1.0, 5.0).gdp_per_capita(), 2_500.0);
    }

    #[test]
    fn test_gdp_per_capita_large_gdp_small_population() {
        // 1e6 billions over one inhabitant must not lose magnitude.
        assert_eq!(card(1, 1.0, 1_000_000.0).gdp_per_capita(), 1e15);
    }

    #[test]
    fn test_degenerate_inputs_yield_zero() {
        assert_eq!(card(1_000, 0.0, 1.0).density(), 0.0);
        assert_eq!(card(0, 1.0, 1.0).gdp_per_capita(), 0.0);
    }
}
