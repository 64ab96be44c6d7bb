//! Terminal-state evaluation.
//!
//! The score only has to order rollout outcomes, so it stays cheap:
//! hp difference plus board presence. Decided games dominate every
//! heuristic value through the infinities.

use crate::engine::{GameState, Side};

/// Score a terminal simulated state from `side`'s perspective.
///
/// Returns `f64::INFINITY` when the opponent is dead and
/// `f64::NEG_INFINITY` when `side` is dead; a line that kills both
/// players counts as a loss.
#[must_use]
pub fn evaluate(state: &GameState, side: Side) -> f64 {
    let me = state.player(side);
    let foe = state.player(side.opponent());

    if me.is_dead() {
        return f64::NEG_INFINITY;
    }
    if foe.is_dead() {
        return f64::INFINITY;
    }

    let presence = |s: Side| -> i32 {
        state
            .board(s)
            .iter()
            .map(|&slot| {
                let card = state.card(slot);
                card.attack + card.defense
            })
            .sum()
    };

    f64::from(me.hp - foe.hp) + f64::from(presence(side) - presence(side.opponent()))
}
