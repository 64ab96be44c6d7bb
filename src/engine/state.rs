//! The authoritative duel state.
//!
//! ## GameState
//!
//! One snapshot of the duel: both players, every card (indexed by slot),
//! and two derived board-membership lists. The lists are caches over
//! `location`/`category`; the card fields are the ground truth, and only
//! the resolver may mutate them, through the `pub(crate)` methods here.
//!
//! ## Cloning
//!
//! Rollouts clone the whole state by value. The card array is small (a
//! hand plus two six-slot boards), so a flat copy is cheaper and safer
//! than any sharing scheme: a clone can never alias the authoritative
//! state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Location};
use super::player::{Player, Side};

/// Maximum creatures per side of the board.
pub const BOARD_CAPACITY: usize = 6;

/// Slots of the creatures on one side of the board.
type BoardIndex = SmallVec<[usize; BOARD_CAPACITY]>;

/// Full duel state for one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Both players, indexed by `Side::index()`.
    pub players: [Player; 2],

    /// Every card of the snapshot. A card's `slot` equals its index here.
    cards: Vec<Card>,

    /// Slots of creatures on the acting player's board.
    board_mine: BoardIndex,

    /// Slots of creatures on the opposing board.
    board_foe: BoardIndex,
}

impl GameState {
    /// Build a state from players and cards.
    ///
    /// Slots are (re)assigned from array positions and the board caches are
    /// rebuilt, so callers may pass cards with unset slots.
    #[must_use]
    pub fn new(players: [Player; 2], mut cards: Vec<Card>) -> Self {
        for (slot, card) in cards.iter_mut().enumerate() {
            card.slot = slot;
        }

        let mut state = Self {
            players,
            cards,
            board_mine: BoardIndex::new(),
            board_foe: BoardIndex::new(),
        };
        state.rebuild_boards();
        state
    }

    // === Players ===

    /// The player on a side.
    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Mutable player access; resolver only.
    pub(crate) fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    // === Cards ===

    /// All cards of the snapshot, in slot order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card in a slot.
    #[must_use]
    pub fn card(&self, slot: usize) -> &Card {
        &self.cards[slot]
    }

    /// Mutable card access; resolver only.
    pub(crate) fn card_mut(&mut self, slot: usize) -> &mut Card {
        &mut self.cards[slot]
    }

    /// Cards currently in the hand.
    pub fn hand(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.location == Location::Hand)
    }

    // === Board caches ===

    /// Slots of the creatures on a side's board.
    #[must_use]
    pub fn board(&self, side: Side) -> &[usize] {
        match side {
            Side::Me => &self.board_mine,
            Side::Foe => &self.board_foe,
        }
    }

    /// Does any creature on a side's board carry guard?
    #[must_use]
    pub fn has_guard(&self, side: Side) -> bool {
        self.board(side).iter().any(|&slot| self.cards[slot].abilities.guard)
    }

    /// Append a slot to a side's board cache; resolver only.
    pub(crate) fn board_push(&mut self, side: Side, slot: usize) {
        debug_assert!(self.board(side).len() < BOARD_CAPACITY);
        match side {
            Side::Me => self.board_mine.push(slot),
            Side::Foe => self.board_foe.push(slot),
        }
    }

    /// Drop a slot from a side's board cache; resolver only.
    pub(crate) fn board_remove(&mut self, side: Side, slot: usize) {
        let board = match side {
            Side::Me => &mut self.board_mine,
            Side::Foe => &mut self.board_foe,
        };
        if let Some(position) = board.iter().position(|&s| s == slot) {
            board.remove(position);
        }
    }

    /// Recompute both board caches from card ground truth.
    pub(crate) fn rebuild_boards(&mut self) {
        self.board_mine.clear();
        self.board_foe.clear();
        for card in &self.cards {
            if !card.on_board() {
                continue;
            }
            match card.location {
                Location::Mine => self.board_mine.push(card.slot),
                Location::Opponent => self.board_foe.push(card.slot),
                _ => unreachable!(),
            }
        }
    }

    /// Verify the caches match card ground truth. Used by debug asserts
    /// and tests; a mismatch means the resolver missed a location change.
    #[must_use]
    pub fn board_index_consistent(&self) -> bool {
        for (side, location) in [(Side::Me, Location::Mine), (Side::Foe, Location::Opponent)] {
            let board = self.board(side);
            let truth: Vec<usize> = self
                .cards
                .iter()
                .filter(|c| c.location == location && c.on_board())
                .map(|c| c.slot)
                .collect();

            if board.len() != truth.len() {
                return false;
            }
            // Order-insensitive: summons append, deaths remove in place.
            if !truth.iter().all(|slot| board.contains(slot)) {
                return false;
            }
        }
        true
    }

    // === Terminal checks ===

    /// Is either player dead?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(Player::is_dead)
    }

    /// The winning side, if exactly one player is dead.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match (self.player(Side::Me).is_dead(), self.player(Side::Foe).is_dead()) {
            (false, true) => Some(Side::Me),
            (true, false) => Some(Side::Foe),
            _ => None,
        }
    }
}
