//! Card slot identification.
//!
//! A game always holds exactly two cards. `CardSlot` names which one.

use serde::{Deserialize, Serialize};

/// Position of a card in the game: card 1 or card 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSlot {
    First,
    Second,
}

impl CardSlot {
    /// Both slots, in collection order.
    pub const ALL: [CardSlot; 2] = [CardSlot::First, CardSlot::Second];

    /// 1-based card number as shown to the user.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            CardSlot::First => 1,
            CardSlot::Second => 2,
        }
    }
}

impl std::fmt::Display for CardSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CARTA {}", self.number())
    }
}
