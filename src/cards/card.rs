//! City card - one player's record.
//!
//! A `CityCard` is only built from already-validated fields, so a card that
//! exists is always complete. Fields are never edited after creation.

use serde::{Deserialize, Serialize};

use super::fields::{CardCode, CityName, Region};

/// One city record entered by a player.
///
/// ## Example
///
/// ```
/// use city_trunfo::cards::{CardCode, CityCard, CityName, Region};
///
/// let card = CityCard::new(
///     "A".parse::<Region>().unwrap(),
///     "A01".parse::<CardCode>().unwrap(),
///     CityName::new("CityA", 2, 63).unwrap(),
///     1_000_000,
///     500.0,
///     10.0,
/// );
///
/// assert_eq!(card.density(), 2000.0);
/// assert_eq!(card.gdp_per_capita(), 10_000.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityCard {
    /// Region letter `A..=H`.
    pub region: Region,

    /// Card code such as `"A01"`.
    pub code: CardCode,

    /// City name.
    pub name: CityName,

    /// Inhabitants.
    pub population: i64,

    /// Area in square kilometers.
    pub area_km2: f64,

    /// Gross domestic product in billions.
    pub gdp_billions: f64,
}

impl CityCard {
    /// Create a new card from validated fields.
    #[must_use]
    pub fn new(
        region: Region,
        code: CardCode,
        name: CityName,
        population: i64,
        area_km2: f64,
        gdp_billions: f64,
    ) -> Self {
        Self {
            region,
            code,
            name,
            population,
            area_km2,
            gdp_billions,
        }
    }
}
