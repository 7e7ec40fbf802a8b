//! Validated card fields.
//!
//! Every field a player types goes through one of the parsers here before it
//! can reach a `CityCard`:
//!
//! - `Region`: one letter `A..=H`
//! - `CardCode`: letter `A..=H` followed by two digits (`"C02"`)
//! - `CityName`: free text within a length range
//! - `parse_int` / `parse_decimal`: bounded numbers
//!
//! Parsers take a line with its terminator already removed. Rejections are
//! `FieldError`s whose `Display` is the message shown to the player.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, FieldError};

/// First letter accepted for regions and card codes.
pub const FIRST_REGION: char = 'A';

/// Last letter accepted for regions and card codes.
pub const LAST_REGION: char = 'H';

fn is_region_letter(ch: char) -> bool {
    (FIRST_REGION..=LAST_REGION).contains(&ch)
}

/// Region letter, always uppercase `A..=H`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region(char);

impl Region {
    /// Get the region letter.
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }
}

impl FromStr for Region {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FieldError::Blank);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                let ch = ch.to_ascii_uppercase();
                if is_region_letter(ch) {
                    Ok(Self(ch))
                } else {
                    Err(FieldError::InvalidRegion)
                }
            }
            _ => Err(FieldError::InvalidRegion),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three-character card code such as `"A01"`.
///
/// Independent of the card's `Region`: a card from region `B` may carry
/// code `"D07"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCode(String);

impl CardCode {
    /// Get the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardCode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let chars: Vec<char> = code.chars().collect();

        match chars.as_slice() {
            [letter, d1, d2]
                if is_region_letter(*letter) && d1.is_ascii_digit() && d2.is_ascii_digit() =>
            {
                Ok(Self(code))
            }
            _ => Err(FieldError::InvalidCode),
        }
    }
}

impl std::fmt::Display for CardCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// City name with its length checked in characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityName(String);

impl CityName {
    /// Validate a name against `[min_len, max_len]` characters.
    ///
    /// Over-long names are rejected, never truncated.
    pub fn new(name: impl Into<String>, min_len: usize, max_len: usize) -> Result<Self, FieldError> {
        let name = name.into();
        let len = name.chars().count();

        if len < min_len {
            Err(FieldError::NameTooShort { min: min_len })
        } else if len > max_len {
            Err(FieldError::NameTooLong { max: max_len })
        } else {
            Ok(Self(name))
        }
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a signed integer that must fill the whole line and lie in `bounds`.
pub fn parse_int(s: &str, bounds: Bounds<i64>) -> Result<i64, FieldError> {
    if s.is_empty() {
        return Err(FieldError::Blank);
    }

    s.parse::<i64>()
        .ok()
        .filter(|v| bounds.contains(*v))
        .ok_or(FieldError::InvalidInt {
            min: bounds.min,
            max: bounds.max,
        })
}

/// Parse a decimal number that must fill the whole line and lie in `bounds`.
pub fn parse_decimal(s: &str, bounds: Bounds<f64>) -> Result<f64, FieldError> {
    if s.is_empty() {
        return Err(FieldError::Blank);
    }

    s.parse::<f64>()
        .ok()
        .filter(|v| bounds.contains(*v))
        .ok_or(FieldError::InvalidDecimal {
            min: bounds.min,
            max: bounds.max,
        })
}
