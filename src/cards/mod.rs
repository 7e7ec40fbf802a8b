//! Card system: validated fields, the card record, derived metrics.
//!
//! ## Key Types
//!
//! - `Region`, `CardCode`, `CityName`: field newtypes that only hold valid values
//! - `CityCard`: the six-field city record
//! - `density` / `gdp_per_capita`: metrics computed from a card

pub mod card;
pub mod fields;
pub mod metrics;

pub use card::CityCard;
pub use fields::{parse_decimal, parse_int, CardCode, CityName, Region};
pub use metrics::{density, gdp_per_capita};
