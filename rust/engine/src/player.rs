use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Opaque seat identifier. Only used for identity and lookup; it never owns
/// anything about the player it names.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a player does on their turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Raise the standing bid (or open a cycle) with `count` dice of `face`
    Bid { count: u32, face: u8 },
    /// Call the previous bidder a liar and reveal every cup
    Challenge,
}

/// A seat at the table: an identity, a display name and a cup of dice.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, dice_count: usize) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(dice_count),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// A player stays in the game while they still hold at least one die.
    pub fn is_active(&self) -> bool {
        !self.hand.is_empty()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
