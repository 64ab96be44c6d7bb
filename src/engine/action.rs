//! Actions and turns.
//!
//! `Action` is a closed sum type matched exhaustively by the resolver and
//! the protocol formatter. Cards are always addressed by slot index into
//! the state the action was generated from, never by display id, which
//! only exists at the protocol boundary.

use serde::{Deserialize, Serialize};

/// Target of an attack or item use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The opposing player directly.
    Face,
    /// A creature, by slot.
    Creature(usize),
}

/// One atomic action within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Do nothing.
    Pass,
    /// Play a creature from hand onto the acting side's board.
    Summon { slot: usize },
    /// Attack with a board creature.
    Attack { slot: usize, target: Target },
    /// Play an item from hand.
    Use { slot: usize, target: Target },
}

/// An ordered action sequence, applied left to right.
///
/// An empty turn means "pass".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    actions: Vec<Action>,
}

impl Turn {
    /// The empty (pass) turn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// The actions in order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the turn holds no actions (semantically "pass").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
