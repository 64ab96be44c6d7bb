//! Player stats and the two sides of a duel.

use serde::{Deserialize, Serialize};

use super::card::Location;

/// One of the two sides of the duel.
///
/// `Me` is the side the snapshot was captured for (its hand is visible);
/// `Foe` is the opposing side. The generator, resolver, and evaluator are
/// all parameterized on the acting side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The acting player.
    Me,
    /// The opposing player.
    Foe,
}

impl Side {
    /// The other side.
    #[must_use]
    pub fn opponent(self) -> Side {
        match self {
            Side::Me => Side::Foe,
            Side::Foe => Side::Me,
        }
    }

    /// Index into a `[Player; 2]` pair.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Me => 0,
            Side::Foe => 1,
        }
    }

    /// The board location belonging to this side.
    #[must_use]
    pub fn board_location(self) -> Location {
        match self {
            Side::Me => Location::Mine,
            Side::Foe => Location::Opponent,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Me => write!(f, "me"),
            Side::Foe => write!(f, "foe"),
        }
    }
}

/// Per-player duel stats.
///
/// `hp` may go to zero or below, which ends the game. `mana` never goes
/// negative under a legal action sequence; the resolver asserts this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Health. The game is over once this is <= 0.
    pub hp: i32,
    /// Mana available this turn.
    pub mana: i32,
    /// Cards remaining in the deck.
    pub deck: i32,
    /// Rune count.
    pub rune: i32,
    /// Cards this player draws at the start of the next turn.
    pub draw: i32,
    /// Extra draws accumulated this turn; reset on every fresh snapshot.
    pub cards_drawn: i32,
}

impl Player {
    /// A player with the given hp and mana; remaining stats zeroed.
    #[must_use]
    pub fn new(hp: i32, mana: i32) -> Self {
        Self {
            hp,
            mana,
            deck: 0,
            rune: 0,
            draw: 0,
            cards_drawn: 0,
        }
    }

    /// Is this player dead?
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
