//! Action resolution: applying one action to a state.
//!
//! The resolver is the only code that mutates a `GameState`. Every entry
//! point asserts its preconditions: an action that fails one was never
//! legal, which means the generator is broken. That is a defect to crash
//! on, not a condition to recover from.
//!
//! ## Combat semantics
//!
//! Creature combat is simultaneous. All keyword gates (ward presence,
//! drain, breakthrough overflow) and both outgoing damage amounts are
//! computed from pre-combat stats; only then is damage applied to either
//! card. A creature dying in the exchange still deals its counter-damage.

use super::action::{Action, Target};
use super::card::{Card, CardCategory, Location};
use super::player::Side;
use super::state::{GameState, BOARD_CAPACITY};

/// What a single damage instance did to a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DamageOutcome {
    /// Non-positive amount; nothing happened.
    Ignored,
    /// Ward consumed the instance entirely.
    Absorbed,
    /// Defense reduced, creature lives.
    Survived,
    /// Creature left play.
    Destroyed,
}

/// Apply one action for `side` to `state`.
pub fn apply(state: &mut GameState, side: Side, action: &Action) {
    match *action {
        Action::Pass => {}
        Action::Summon { slot } => summon(state, side, slot),
        Action::Use { slot, target } => use_item(state, side, slot, target),
        Action::Attack { slot, target } => attack(state, side, slot, target),
    }
    debug_assert!(
        state.board_index_consistent(),
        "board caches out of sync after {action:?}"
    );
}

fn summon(state: &mut GameState, side: Side, slot: usize) {
    assert_eq!(side, Side::Me, "summon from a hidden hand");

    let card = state.card(slot).clone();
    assert_eq!(card.location, Location::Hand, "summon of a card outside the hand");
    assert_eq!(card.category, CardCategory::Creature, "summon of a non-creature");
    assert!(!card.used, "summon of a card already committed this turn");
    assert!(card.cost <= state.player(side).mana, "summon without the mana to pay");
    assert!(state.board(side).len() < BOARD_CAPACITY, "summon onto a full board");

    state.player_mut(side).mana -= card.cost;
    {
        let summoned = state.card_mut(slot);
        summoned.location = side.board_location();
        summoned.can_attack = summoned.abilities.charge;
    }
    state.board_push(side, slot);
    apply_play_effects(state, side, &card);
}

fn use_item(state: &mut GameState, side: Side, slot: usize, target: Target) {
    assert_eq!(side, Side::Me, "item use from a hidden hand");

    let item = state.card(slot).clone();
    assert_eq!(item.location, Location::Hand, "use of a card outside the hand");
    assert!(item.category.is_item(), "use of a creature card");
    assert!(!item.used, "use of a card already committed this turn");
    assert!(item.cost <= state.player(side).mana, "item use without the mana to pay");
    match target {
        Target::Face => {
            assert_eq!(item.category, CardCategory::BlueItem, "only blue items target the face");
        }
        Target::Creature(_) => {
            assert_ne!(item.category, CardCategory::BlueItem, "blue items target the face only");
        }
    }

    state.player_mut(side).mana -= item.cost;
    {
        let used = state.card_mut(slot);
        used.location = Location::OutOfPlay;
        used.used = true;
    }
    apply_play_effects(state, side, &item);

    match target {
        Target::Face => {
            // The play effects above are the whole face payload.
        }
        Target::Creature(target_slot) => {
            let board_side = match item.category {
                CardCategory::GreenItem => side,
                CardCategory::RedItem => side.opponent(),
                _ => unreachable!("only green and red items target creatures"),
            };

            let defender = state.card(target_slot);
            assert_eq!(
                defender.location,
                board_side.board_location(),
                "item target is not on the required board"
            );
            assert_eq!(defender.category, CardCategory::Creature, "item target is not a creature");

            {
                let touched = state.card_mut(target_slot);
                match item.category {
                    CardCategory::GreenItem => touched.abilities.grant(item.abilities),
                    CardCategory::RedItem => touched.abilities.strip(item.abilities),
                    _ => unreachable!(),
                }
                touched.attack = (touched.attack + item.attack).max(0);
            }

            // A positive defense field is a boost; otherwise it is damage
            // and must go through the ward/death path. Strips above happen
            // first, so a red item carrying W burns through the ward it
            // just removed.
            if item.defense > 0 {
                state.card_mut(target_slot).defense += item.defense;
            } else if receive_damage(state, target_slot, -item.defense, false)
                == DamageOutcome::Destroyed
            {
                state.board_remove(board_side, target_slot);
            }
        }
    }
}

fn attack(state: &mut GameState, side: Side, slot: usize, target: Target) {
    let attacker = state.card(slot).clone();
    assert_eq!(attacker.location, side.board_location(), "attacker is not on the acting board");
    assert_eq!(attacker.category, CardCategory::Creature, "attack with a non-creature");
    assert!(attacker.can_attack, "attack with an exhausted creature");
    assert!(!attacker.used, "attack with a card already committed this turn");

    // A creature attacks at most once per turn, whatever the outcome.
    {
        let spent = state.card_mut(slot);
        spent.can_attack = false;
        spent.used = true;
    }

    let opponent = side.opponent();
    match target {
        Target::Face => {
            assert!(!state.has_guard(opponent), "face attack while a guard is up");
            if attacker.attack > 0 {
                state.player_mut(opponent).hp -= attacker.attack;
            }
        }
        Target::Creature(target_slot) => {
            let defender = state.card(target_slot).clone();
            assert_eq!(
                defender.location,
                opponent.board_location(),
                "attack target is not an opposing board creature"
            );
            assert_eq!(defender.category, CardCategory::Creature, "attack target is not a creature");
            assert!(
                !state.has_guard(opponent) || defender.abilities.guard,
                "guard bypassed"
            );

            let overflow = if attacker.abilities.breakthrough && !defender.abilities.ward {
                (attacker.attack - defender.defense).max(0)
            } else {
                0
            };
            let heal_mine = if attacker.abilities.drain && !defender.abilities.ward {
                attacker.attack.max(0)
            } else {
                0
            };
            let heal_theirs = if defender.abilities.drain && !attacker.abilities.ward {
                defender.attack.max(0)
            } else {
                0
            };

            let on_defender =
                receive_damage(state, target_slot, attacker.attack, attacker.abilities.lethal);
            let on_attacker =
                receive_damage(state, slot, defender.attack, defender.abilities.lethal);

            state.player_mut(side).hp += heal_mine;
            state.player_mut(opponent).hp += heal_theirs;
            if overflow > 0 {
                state.player_mut(opponent).hp -= overflow;
            }

            if on_defender == DamageOutcome::Destroyed {
                state.board_remove(opponent, target_slot);
            }
            if on_attacker == DamageOutcome::Destroyed {
                state.board_remove(side, slot);
            }
        }
    }
}

/// Play-time side effects shared by summon and item use.
fn apply_play_effects(state: &mut GameState, side: Side, card: &Card) {
    state.player_mut(side).hp += card.my_health_change;
    state.player_mut(side.opponent()).hp += card.opponent_health_change;

    let acting = state.player_mut(side);
    acting.draw += card.card_draw;
    acting.cards_drawn += card.card_draw;
}

/// The uniform damage-receipt rule.
///
/// Non-positive amounts are ignored. Ward consumes the whole instance.
/// Otherwise defense drops by `amount` and the card leaves play at
/// defense <= 0, or unconditionally when the damage was lethal.
fn receive_damage(state: &mut GameState, slot: usize, amount: i32, lethal: bool) -> DamageOutcome {
    if amount <= 0 {
        return DamageOutcome::Ignored;
    }

    let card = state.card_mut(slot);
    if card.abilities.ward {
        card.abilities.ward = false;
        return DamageOutcome::Absorbed;
    }

    card.defense -= amount;
    if lethal || card.defense <= 0 {
        card.location = Location::OutOfPlay;
        DamageOutcome::Destroyed
    } else {
        DamageOutcome::Survived
    }
}
