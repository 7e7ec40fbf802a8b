//! Card comparison.
//!
//! `compare` orders card 1 against card 2 so that `Greater` always means
//! "card 1 wins", whatever the attribute's direction. `Verdict` names the
//! winner for display.

use std::cmp::Ordering;

use crate::cards::CityCard;
use crate::core::CardSlot;

use super::attribute::{Attribute, Direction};

/// Outcome of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Single winning card.
    Winner(CardSlot),
    /// Both cards rank equally.
    Tie,
}

impl Verdict {
    /// Convert card 1's ordering against card 2 into a verdict.
    #[must_use]
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Verdict::Winner(CardSlot::First),
            Ordering::Less => Verdict::Winner(CardSlot::Second),
            Ordering::Equal => Verdict::Tie,
        }
    }

    /// Check if a slot won.
    #[must_use]
    pub fn is_winner(&self, slot: CardSlot) -> bool {
        matches!(self, Verdict::Winner(s) if *s == slot)
    }
}

fn raw_value(card: &CityCard, attribute: Attribute) -> f64 {
    match attribute {
        Attribute::Population => card.population as f64,
        Attribute::Area => card.area_km2,
        Attribute::Gdp => card.gdp_billions,
        Attribute::Density => card.density(),
        Attribute::GdpPerCapita => card.gdp_per_capita(),
    }
}

/// Rank `first` relative to `second` on `attribute`.
///
/// `Greater` means `first` wins. Equal values are always `Equal`.
#[must_use]
pub fn compare(first: &CityCard, second: &CityCard, attribute: Attribute) -> Ordering {
    let ordering = match attribute {
        // Integer field, compared exactly.
        Attribute::Population => first.population.cmp(&second.population),
        _ => raw_value(first, attribute)
            .partial_cmp(&raw_value(second, attribute))
            .unwrap_or(Ordering::Equal),
    };

    match attribute.direction() {
        Direction::HigherWins => ordering,
        Direction::LowerWins => ordering.reverse(),
    }
}

/// Compare and name the winner.
#[must_use]
pub fn judge(first: &CityCard, second: &CityCard, attribute: Attribute) -> Verdict {
    Verdict::from_ordering(compare(first, second, attribute))
}
