//! Engine integration tests: legality fans and combat keyword resolution.

use locm_agent::engine::{
    apply, legal_actions, Action, Card, CardCategory, GameState, Location, Player, Side, Target,
    BOARD_CAPACITY,
};

fn duel(cards: Vec<Card>, mana: i32) -> GameState {
    GameState::new([Player::new(30, mana), Player::new(30, mana)], cards)
}

// =============================================================================
// Guard Lock
// =============================================================================

#[test]
fn test_guards_are_the_only_targets_while_present() {
    let state = duel(
        vec![
            Card::creature(1, 1, 2, 2).at(Location::Mine),
            Card::creature(2, 1, 3, 3).at(Location::Mine),
            Card::creature(3, 1, 4, 4).at(Location::Opponent),
            Card::creature(4, 1, 1, 5).with_abilities("---G--").at(Location::Opponent),
            Card::creature(5, 1, 1, 5).with_abilities("---G--").at(Location::Opponent),
        ],
        0,
    );

    let attacks: Vec<Action> = legal_actions(&state, Side::Me);
    assert!(!attacks.is_empty());

    for action in &attacks {
        match action {
            Action::Attack { target: Target::Creature(slot), .. } => {
                assert!(
                    state.card(*slot).abilities.guard,
                    "attack fan may only contain guards, found slot {slot}"
                );
            }
            Action::Attack { target: Target::Face, .. } => {
                panic!("face attack generated while a guard is up");
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    // Both guards are individually targetable by both attackers.
    let guard_targets: Vec<(usize, usize)> = attacks
        .iter()
        .map(|a| match a {
            Action::Attack { slot, target: Target::Creature(t) } => (*slot, *t),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(guard_targets, vec![(0, 3), (0, 4), (1, 3), (1, 4)]);
}

#[test]
fn test_killing_the_last_guard_reopens_the_face() {
    let mut state = duel(
        vec![
            Card::creature(1, 1, 5, 5).at(Location::Mine),
            Card::creature(2, 1, 4, 4).at(Location::Mine),
            Card::creature(3, 1, 0, 4).with_abilities("---G--").at(Location::Opponent),
        ],
        0,
    );

    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(2) });

    let actions = legal_actions(&state, Side::Me);
    assert!(
        actions.contains(&Action::Attack { slot: 1, target: Target::Face }),
        "face must open up once the guard dies"
    );
}

// =============================================================================
// Ward
// =============================================================================

#[test]
fn test_ward_absorbs_one_instance_of_any_size() {
    let mut state = duel(
        vec![
            Card::creature(1, 1, 9, 9).at(Location::Mine),
            Card::creature(2, 1, 2, 9).at(Location::Mine),
            Card::creature(3, 1, 0, 4).with_abilities("-----W").at(Location::Opponent),
        ],
        0,
    );

    // First hit of any magnitude: fully absorbed, ward gone.
    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(2) });
    assert_eq!(state.card(2).defense, 4);
    assert!(!state.card(2).abilities.ward);

    // Second hit of any size reduces defense normally.
    apply(&mut state, Side::Me, &Action::Attack { slot: 1, target: Target::Creature(2) });
    assert_eq!(state.card(2).defense, 2);
}

// =============================================================================
// Lethal
// =============================================================================

#[test]
fn test_lethal_destroys_any_non_ward_target() {
    let mut state = duel(
        vec![
            Card::creature(1, 1, 1, 1).with_abilities("----L-").at(Location::Mine),
            Card::creature(2, 1, 0, 99).at(Location::Opponent),
        ],
        0,
    );

    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(1) });

    assert_eq!(state.card(1).location, Location::OutOfPlay);
    assert!(state.board(Side::Foe).is_empty());
}

#[test]
fn test_ward_stops_lethal() {
    let mut state = duel(
        vec![
            Card::creature(1, 1, 1, 1).with_abilities("----L-").at(Location::Mine),
            Card::creature(2, 1, 0, 99).with_abilities("-----W").at(Location::Opponent),
        ],
        0,
    );

    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(1) });

    assert_eq!(state.card(1).location, Location::Opponent);
    assert_eq!(state.card(1).defense, 99);
    assert!(!state.card(1).abilities.ward);
}

#[test]
fn test_zero_attack_lethal_does_nothing() {
    let mut state = duel(
        vec![
            Card::creature(1, 1, 0, 2).with_abilities("----L-").at(Location::Mine),
            Card::creature(2, 1, 0, 5).at(Location::Opponent),
        ],
        0,
    );

    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(1) });
    assert_eq!(state.card(1).location, Location::Opponent);
}

// =============================================================================
// Board Capacity
// =============================================================================

#[test]
fn test_summon_never_legal_on_a_full_board() {
    let mut cards = vec![Card::creature(99, 0, 1, 1)];
    for i in 0..BOARD_CAPACITY as i32 {
        cards.push(Card::creature(i, 1, 1, 1).at(Location::Mine).exhausted());
    }
    let state = duel(cards, 10);

    assert!(
        !legal_actions(&state, Side::Me)
            .iter()
            .any(|a| matches!(a, Action::Summon { .. })),
        "seventh summon must not be generated"
    );
}

// =============================================================================
// End-to-End Examples
// =============================================================================

#[test]
fn test_exact_mana_summon_end_to_end() {
    // 3 mana, one 3-cost 2/2 in hand, both boards empty.
    let mut state = duel(vec![Card::creature(8, 3, 2, 2)], 3);

    let actions = legal_actions(&state, Side::Me);
    assert_eq!(actions, vec![Action::Summon { slot: 0 }], "exactly one legal action");

    apply(&mut state, Side::Me, &actions[0]);

    assert_eq!(state.card(0).location, Location::Mine);
    assert_eq!(state.player(Side::Me).mana, 0);
    assert_eq!(state.board(Side::Me), &[0]);
    assert!(!state.card(0).can_attack, "no charge: cannot attack this turn");

    // Hand exhausted, nothing can attack: the fan is empty (pass).
    assert!(legal_actions(&state, Side::Me).is_empty());
}

#[test]
fn test_breakthrough_overflow_end_to_end() {
    // 5-attack breakthrough into a 3-defense creature: 2 overflow to the face.
    let mut state = duel(
        vec![
            Card::creature(1, 1, 5, 4).with_abilities("B-----").at(Location::Mine),
            Card::creature(2, 1, 1, 3).at(Location::Opponent),
        ],
        0,
    );

    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(1) });

    assert_eq!(state.card(1).location, Location::OutOfPlay);
    assert_eq!(state.player(Side::Foe).hp, 28);
    assert_eq!(state.card(0).defense, 3, "counter-damage still lands");
}

#[test]
fn test_breakthrough_blocked_by_ward() {
    let mut state = duel(
        vec![
            Card::creature(1, 1, 5, 4).with_abilities("B-----").at(Location::Mine),
            Card::creature(2, 1, 1, 3).with_abilities("-----W").at(Location::Opponent),
        ],
        0,
    );

    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(1) });

    assert_eq!(state.player(Side::Foe).hp, 30, "absorbed hit cannot overflow");
    assert_eq!(state.card(1).location, Location::Opponent);
}

#[test]
fn test_drain_exchange_end_to_end() {
    // 4-attack drain into a 10-defense creature: heal 4, target at 6,
    // attacker takes the symmetric counter-damage.
    let mut state = duel(
        vec![
            Card::creature(1, 1, 4, 9).with_abilities("--D---").at(Location::Mine),
            Card::creature(2, 1, 3, 10).at(Location::Opponent),
        ],
        0,
    );

    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(1) });

    assert_eq!(state.player(Side::Me).hp, 34);
    assert_eq!(state.card(1).defense, 6);
    assert_eq!(state.card(0).defense, 6, "9 - 3 counter-damage");
    assert_eq!(state.player(Side::Foe).hp, 30);
}

#[test]
fn test_defender_drain_heals_its_own_controller() {
    let mut state = duel(
        vec![
            Card::creature(1, 1, 2, 9).at(Location::Mine),
            Card::creature(2, 1, 3, 10).with_abilities("--D---").at(Location::Opponent),
        ],
        0,
    );

    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(1) });

    assert_eq!(state.player(Side::Foe).hp, 33, "defender's drain heals the defender's side");
    assert_eq!(state.player(Side::Me).hp, 30);
}

#[test]
fn test_drain_blocked_by_receiver_ward() {
    let mut state = duel(
        vec![
            Card::creature(1, 1, 4, 9).with_abilities("--D---").at(Location::Mine),
            Card::creature(2, 1, 3, 10).with_abilities("-----W").at(Location::Opponent),
        ],
        0,
    );

    apply(&mut state, Side::Me, &Action::Attack { slot: 0, target: Target::Creature(1) });

    assert_eq!(state.player(Side::Me).hp, 30, "no damage dealt through ward, no heal");
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn test_full_item_turn() {
    let mut state = duel(
        vec![
            Card::item(1, CardCategory::GreenItem, 2, 1, 2).with_abilities("---G--"),
            Card::item(2, CardCategory::RedItem, 2, 0, -3),
            Card::item(3, CardCategory::BlueItem, 1, 0, 0).with_side_effects(2, -2, 1),
            Card::creature(4, 1, 2, 2).at(Location::Mine),
            Card::creature(5, 1, 4, 3).at(Location::Opponent),
        ],
        5,
    );

    apply(&mut state, Side::Me, &Action::Use { slot: 0, target: Target::Creature(3) });
    apply(&mut state, Side::Me, &Action::Use { slot: 1, target: Target::Creature(4) });
    apply(&mut state, Side::Me, &Action::Use { slot: 2, target: Target::Face });

    assert_eq!(state.player(Side::Me).mana, 0);
    assert_eq!(state.player(Side::Me).hp, 32);
    assert_eq!(state.player(Side::Me).draw, 1);
    assert_eq!(state.player(Side::Foe).hp, 28);

    let buffed = state.card(3);
    assert_eq!((buffed.attack, buffed.defense), (3, 4));
    assert!(buffed.abilities.guard);

    assert_eq!(state.card(4).location, Location::OutOfPlay, "3 damage kills the 3-defense creature");
    assert!(state.board(Side::Foe).is_empty());

    for slot in 0..3 {
        assert_eq!(state.card(slot).location, Location::OutOfPlay);
    }
}

#[test]
fn test_charge_allows_summon_then_attack() {
    let mut state = duel(vec![Card::creature(1, 2, 3, 2).with_abilities("-C----")], 2);

    apply(&mut state, Side::Me, &Action::Summon { slot: 0 });
    let actions = legal_actions(&state, Side::Me);
    assert_eq!(actions, vec![Action::Attack { slot: 0, target: Target::Face }]);

    apply(&mut state, Side::Me, &actions[0]);
    assert_eq!(state.player(Side::Foe).hp, 27);
}
