//! The legal action generator.
//!
//! Given a state and an acting side, `legal_actions` enumerates the
//! *complete* set of single actions legal right now. It is a pure
//! legality oracle: it never plans, never filters "bad" moves, and never
//! mutates anything. The planner re-invokes it after each applied action,
//! so played cards and exhausted attackers drop out of the fan naturally.
//!
//! Only the acting player's hand is visible in a snapshot, so hand plays
//! are generated for `Side::Me` only; the opposing fan is attacks.

use super::action::{Action, Target};
use super::card::{Card, CardCategory, Location};
use super::player::Side;
use super::state::{GameState, BOARD_CAPACITY};

/// Every action legal for `side` in `state`.
///
/// An empty result means the side has nothing left to do (pass).
#[must_use]
pub fn legal_actions(state: &GameState, side: Side) -> Vec<Action> {
    let mut actions = Vec::new();
    push_hand_plays(state, side, &mut actions);
    push_attacks(state, side, &mut actions);
    actions
}

/// Can this hand card be played at all right now?
fn playable(state: &GameState, side: Side, card: &Card) -> bool {
    card.location == Location::Hand && !card.used && card.cost <= state.player(side).mana
}

fn push_hand_plays(state: &GameState, side: Side, actions: &mut Vec<Action>) {
    if side != Side::Me {
        // The opposing hand is hidden; there is nothing to fan out.
        return;
    }

    for card in state.cards() {
        if !playable(state, side, card) {
            continue;
        }

        match card.category {
            CardCategory::Creature => {
                if state.board(side).len() < BOARD_CAPACITY {
                    actions.push(Action::Summon { slot: card.slot });
                }
            }
            CardCategory::BlueItem => {
                actions.push(Action::Use { slot: card.slot, target: Target::Face });
            }
            CardCategory::RedItem => {
                for &target in state.board(side.opponent()) {
                    actions.push(Action::Use { slot: card.slot, target: Target::Creature(target) });
                }
            }
            CardCategory::GreenItem => {
                for &target in state.board(side) {
                    actions.push(Action::Use { slot: card.slot, target: Target::Creature(target) });
                }
            }
        }
    }
}

fn push_attacks(state: &GameState, side: Side, actions: &mut Vec<Action>) {
    let defenders = state.board(side.opponent());
    let guards: Vec<usize> = defenders
        .iter()
        .copied()
        .filter(|&slot| state.card(slot).abilities.guard)
        .collect();

    for &attacker in state.board(side) {
        let card = state.card(attacker);
        if !card.can_attack || card.used {
            continue;
        }

        if guards.is_empty() {
            actions.push(Action::Attack { slot: attacker, target: Target::Face });
            for &defender in defenders {
                actions.push(Action::Attack { slot: attacker, target: Target::Creature(defender) });
            }
        } else {
            // Guards lock the fan: they are the only legal targets.
            for &guard in &guards {
                actions.push(Action::Attack { slot: attacker, target: Target::Creature(guard) });
            }
        }
    }
}
