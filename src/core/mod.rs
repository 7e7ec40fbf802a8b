//! Core types shared by every layer: card slots, limits, errors.

pub mod config;
pub mod error;
pub mod slot;

pub use config::{Bounds, TrunfoConfig};
pub use error::{FieldError, SessionError};
pub use slot::CardSlot;
