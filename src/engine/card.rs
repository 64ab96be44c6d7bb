//! Card value type and its enumerated properties.
//!
//! A `Card` is one card instance somewhere in the duel: in the hand, on a
//! board, or out of play. It carries the static numbers the protocol
//! supplies (cost, stats, play-time side effects), the decoded keyword
//! flags, and the two per-turn simulation flags the planner relies on
//! (`can_attack`, `used`).
//!
//! ## Slot addressing
//!
//! Every card has a `slot`: its index into the owning state's card array.
//! Slots are assigned once when the state is built and never renumbered,
//! so actions can address cards by slot for the whole lifetime of that
//! state and all of its rollout clones.

use serde::{Deserialize, Serialize};

/// Where a card currently is.
///
/// `OutOfPlay` is terminal: a discarded item or a dead creature never
/// transitions anywhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// In the acting player's hand.
    Hand,
    /// On the acting player's side of the board.
    Mine,
    /// On the opposing side of the board.
    Opponent,
    /// Discarded or destroyed.
    OutOfPlay,
}

impl Location {
    /// Decode the snapshot's location code (0 hand, 1 mine, -1 opponent).
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Location::Hand),
            1 => Some(Location::Mine),
            -1 => Some(Location::Opponent),
            _ => None,
        }
    }

    /// Is this one of the two board locations?
    #[must_use]
    pub fn is_board(self) -> bool {
        matches!(self, Location::Mine | Location::Opponent)
    }
}

/// The four card categories of the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    /// A creature that can be summoned to the board.
    Creature,
    /// An item played on one of your own creatures (buffs, keyword grants).
    GreenItem,
    /// An item played on an opposing creature (debuffs, keyword strips, damage).
    RedItem,
    /// An item played directly at the opposing player.
    BlueItem,
}

impl CardCategory {
    /// Decode the snapshot's category code (0..=3).
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(CardCategory::Creature),
            1 => Some(CardCategory::GreenItem),
            2 => Some(CardCategory::RedItem),
            3 => Some(CardCategory::BlueItem),
            _ => None,
        }
    }

    /// Is this an item category?
    #[must_use]
    pub fn is_item(self) -> bool {
        self != CardCategory::Creature
    }
}

/// The six keyword flags a card can carry.
///
/// Decoded from the snapshot's letter mask (`B` breakthrough, `C` charge,
/// `D` drain, `G` guard, `L` lethal, `W` ward; `-` for an absent letter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Abilities {
    /// Excess combat damage carries through to the opposing player.
    pub breakthrough: bool,
    /// May attack the turn it is summoned.
    pub charge: bool,
    /// Combat damage dealt heals the controller.
    pub drain: bool,
    /// Must be attacked before any other target on its side.
    pub guard: bool,
    /// Any positive damage destroys a creature it hits.
    pub lethal: bool,
    /// Absorbs the next single instance of damage, then is removed.
    pub ward: bool,
}

impl Abilities {
    /// No keywords.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Decode a letter mask. Unknown characters (including `-`) are ignored.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut abilities = Self::default();
        for letter in letters.chars() {
            match letter {
                'B' => abilities.breakthrough = true,
                'C' => abilities.charge = true,
                'D' => abilities.drain = true,
                'G' => abilities.guard = true,
                'L' => abilities.lethal = true,
                'W' => abilities.ward = true,
                _ => {}
            }
        }
        abilities
    }

    /// True if no keyword is set.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }

    /// Add every keyword `other` carries (green item grant).
    pub fn grant(&mut self, other: Abilities) {
        self.breakthrough |= other.breakthrough;
        self.charge |= other.charge;
        self.drain |= other.drain;
        self.guard |= other.guard;
        self.lethal |= other.lethal;
        self.ward |= other.ward;
    }

    /// Remove every keyword `other` carries (red item strip).
    pub fn strip(&mut self, other: Abilities) {
        self.breakthrough &= !other.breakthrough;
        self.charge &= !other.charge;
        self.drain &= !other.drain;
        self.guard &= !other.guard;
        self.lethal &= !other.lethal;
        self.ward &= !other.ward;
    }
}

impl std::fmt::Display for Abilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = [
            (self.breakthrough, 'B'),
            (self.charge, 'C'),
            (self.drain, 'D'),
            (self.guard, 'G'),
            (self.lethal, 'L'),
            (self.ward, 'W'),
        ];
        for (set, letter) in mask {
            write!(f, "{}", if set { letter } else { '-' })?;
        }
        Ok(())
    }
}

/// One card instance in a duel state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Archetype number from the card set (shared by all copies of a card).
    pub card_number: i32,
    /// Display identifier used by the wire protocol to address this instance.
    pub instance_id: i32,
    /// Index into the owning state's card array. Fixed for the state's lifetime.
    pub slot: usize,
    /// Where the card currently is.
    pub location: Location,
    /// Creature or item color.
    pub category: CardCategory,
    /// Mana cost to play from hand.
    pub cost: i32,
    /// Attack value (for items: the attack delta applied to the target).
    pub attack: i32,
    /// Defense value (for items: a positive boost, or damage when non-positive).
    pub defense: i32,
    /// Keyword flags.
    pub abilities: Abilities,
    /// HP delta applied to the acting player when played.
    pub my_health_change: i32,
    /// HP delta applied to the opposing player when played.
    pub opponent_health_change: i32,
    /// Extra cards the acting player draws next turn when played.
    pub card_draw: i32,
    /// Creature may still attack this turn.
    pub can_attack: bool,
    /// Already committed in the turn being planned.
    pub used: bool,
}

impl Card {
    /// A creature in hand with no keywords or side effects.
    #[must_use]
    pub fn creature(instance_id: i32, cost: i32, attack: i32, defense: i32) -> Self {
        Self {
            card_number: 0,
            instance_id,
            slot: 0,
            location: Location::Hand,
            category: CardCategory::Creature,
            cost,
            attack,
            defense,
            abilities: Abilities::none(),
            my_health_change: 0,
            opponent_health_change: 0,
            card_draw: 0,
            can_attack: false,
            used: false,
        }
    }

    /// An item in hand with no keywords or side effects.
    #[must_use]
    pub fn item(instance_id: i32, category: CardCategory, cost: i32, attack: i32, defense: i32) -> Self {
        assert!(category.is_item(), "item constructor given a creature category");
        Self {
            category,
            ..Self::creature(instance_id, cost, attack, defense)
        }
    }

    /// Set the keyword mask (builder style).
    #[must_use]
    pub fn with_abilities(mut self, letters: &str) -> Self {
        self.abilities = Abilities::from_letters(letters);
        self
    }

    /// Set the three play-time side effects (builder style).
    #[must_use]
    pub fn with_side_effects(mut self, own_hp: i32, opponent_hp: i32, draw: i32) -> Self {
        self.my_health_change = own_hp;
        self.opponent_health_change = opponent_hp;
        self.card_draw = draw;
        self
    }

    /// Move the card to a location (builder style). Board creatures start
    /// ready to attack, matching a fresh turn snapshot.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self.can_attack = location.is_board() && self.category == CardCategory::Creature;
        self
    }

    /// Mark the creature as already exhausted (builder style).
    #[must_use]
    pub fn exhausted(mut self) -> Self {
        self.can_attack = false;
        self
    }

    /// Is this a creature currently on either board?
    #[must_use]
    pub fn on_board(&self) -> bool {
        self.location.is_board() && self.category == CardCategory::Creature
    }
}
