//! # city-trunfo
//!
//! A two-card city comparison game in the Super Trunfo style, played on the
//! console.
//!
//! Two players each enter a city card (region, code, name, population, area,
//! GDP). The game prints both cards with their derived metrics, then
//! compares them on an attribute picked from a menu until the players stop.
//!
//! ## Design
//!
//! 1. **Valid by construction**: field newtypes (`Region`, `CardCode`,
//!    `CityName`) can only hold accepted values, so a `CityCard` is always
//!    complete.
//!
//! 2. **Pure core, thin console**: parsing, metrics and comparison are pure
//!    functions. Only `console` touches I/O, and it is generic over
//!    `BufRead`/`Write`.
//!
//! 3. **Closed attribute set**: `Attribute` is an enum and the comparator
//!    matches it exhaustively. Menu selectors are validated before they
//!    become an `Attribute`.
//!
//! ## Modules
//!
//! - `core`: card slots, field limits, error types
//! - `cards`: field validators, the card record, derived metrics
//! - `rules`: attributes, comparator, verdicts
//! - `console`: prompter, screen text, session state machine, logging

pub mod cards;
pub mod console;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Bounds, CardSlot, FieldError, SessionError, TrunfoConfig};

pub use crate::cards::{density, gdp_per_capita, CardCode, CityCard, CityName, Region};

pub use crate::rules::{compare, judge, Attribute, Direction, Verdict};

pub use crate::console::{Prompter, Round, Session, SessionReport, Stage};
