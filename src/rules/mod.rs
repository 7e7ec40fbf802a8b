//! Round rules: attributes and the comparator.

pub mod attribute;
pub mod compare;

pub use attribute::{Attribute, Direction};
pub use compare::{compare, judge, Verdict};
