//! Comparison attributes.
//!
//! The five criteria a round can be played on, each with the direction that
//! wins. Menu selectors are 1-based in the order of `Attribute::ALL`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::parse_int;
use crate::core::{Bounds, FieldError};

/// Which side of a comparison wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    HigherWins,
    LowerWins,
}

/// Basis for comparing two cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Population,
    Area,
    Gdp,
    /// Lower density wins, read as a quality-of-life proxy.
    Density,
    GdpPerCapita,
}

impl Attribute {
    /// All attributes in menu order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Population,
        Attribute::Area,
        Attribute::Gdp,
        Attribute::Density,
        Attribute::GdpPerCapita,
    ];

    /// Look up an attribute by its 1-based menu selector.
    #[must_use]
    pub fn from_selector(selector: i64) -> Option<Self> {
        usize::try_from(selector)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// 1-based menu selector.
    #[must_use]
    pub const fn selector(self) -> i64 {
        match self {
            Attribute::Population => 1,
            Attribute::Area => 2,
            Attribute::Gdp => 3,
            Attribute::Density => 4,
            Attribute::GdpPerCapita => 5,
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Attribute::Density => Direction::LowerWins,
            _ => Direction::HigherWins,
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Attribute::Population => "População",
            Attribute::Area => "Área",
            Attribute::Gdp => "PIB em bilhões",
            Attribute::Density => "Densidade",
            Attribute::GdpPerCapita => "PIB per capita",
        }
    }
}

impl FromStr for Attribute {
    type Err = FieldError;

    /// Parse a menu selector line (`"1"`..=`"5"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selectors = Bounds::new(1, Self::ALL.len() as i64);
        let selector = parse_int(s, selectors)?;
        Self::from_selector(selector).ok_or(FieldError::InvalidInt {
            min: selectors.min,
            max: selectors.max,
        })
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::from_selector(attr.selector()), Some(attr));
        }
    }

    #[test]
    fn test_selector_out_of_range() {
        assert_eq!(Attribute::from_selector(0), None);
        assert_eq!(Attribute::from_selector(6), None);
        assert_eq!(Attribute::from_selector(-1), None);
    }

    #[test]
    fn test_parse_menu_line() {
        assert_eq!("4".parse::<Attribute>(), Ok(Attribute::Density));
        assert_eq!("".parse::<Attribute>(), Err(FieldError::Blank));
        assert_eq!(
            "9".parse::<Attribute>(),
            Err(FieldError::InvalidInt { min: 1, max: 5 })
        );
    }

    #[test]
    fn test_only_density_prefers_lower() {
        for attr in Attribute::ALL {
            let expected = if attr == Attribute::Density {
                Direction::LowerWins
            } else {
                Direction::HigherWins
            };
            assert_eq!(attr.direction(), expected, "{attr:?}");
        }
    }
}
