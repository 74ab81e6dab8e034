//! Pickup items

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{PICK, ROCK};

/// An item the player can carry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Item {
    Rock,
    Pickaxe,
}

impl Item {
    /// Map symbol for this item
    pub const fn symbol(&self) -> char {
        match self {
            Item::Rock => ROCK,
            Item::Pickaxe => PICK,
        }
    }

    /// Look up the item drawn with `symbol`
    pub const fn from_symbol(symbol: char) -> Option<Item> {
        match symbol {
            ROCK => Some(Item::Rock),
            PICK => Some(Item::Pickaxe),
            _ => None,
        }
    }
}
