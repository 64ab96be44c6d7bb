//! Turn formatting.
//!
//! Actions are slot-addressed internally; the wire wants display ids.
//! Formatting therefore needs the state the turn was planned against:
//! the same state, or the addressing is garbage.

use crate::engine::{Action, GameState, Target, Turn};

/// Sentinel the wire uses for "the opposing player" as a target.
const FACE: i32 = -1;

/// Format a whole turn as one output line.
///
/// An empty turn prints as `PASS`; otherwise the actions join with `;`.
#[must_use]
pub fn format_turn(turn: &Turn, state: &GameState) -> String {
    if turn.is_empty() {
        return "PASS".to_string();
    }

    turn.actions()
        .iter()
        .map(|action| format_action(action, state))
        .collect::<Vec<String>>()
        .join(";")
}

/// Format a single action.
#[must_use]
pub fn format_action(action: &Action, state: &GameState) -> String {
    let id = |slot: usize| state.card(slot).instance_id;
    let target_id = |target: Target| match target {
        Target::Face => FACE,
        Target::Creature(slot) => id(slot),
    };

    match *action {
        Action::Pass => "PASS".to_string(),
        Action::Summon { slot } => format!("SUMMON {}", id(slot)),
        Action::Attack { slot, target } => format!("ATTACK {} {}", id(slot), target_id(target)),
        Action::Use { slot, target } => format!("USE {} {}", id(slot), target_id(target)),
    }
}

/// Format a draft pick by candidate index.
#[must_use]
pub fn format_pick(index: usize) -> String {
    format!("PICK {index}")
}
