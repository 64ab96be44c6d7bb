//! Draft-phase card picking.
//!
//! During the draft the snapshot offers three candidate cards per turn.
//! The picker scores each candidate by how far the deck's mana curve
//! would sit from a fixed target shape after taking it, and picks the
//! candidate with the smallest deviation. Creature count has its own
//! heavily weighted target so the deck cannot drift item-heavy.

use serde::Serialize;

use crate::engine::{Card, CardCategory};

/// Candidates offered per draft turn.
pub const CARDS_PER_PICK: usize = 3;

/// Highest mana cost tracked individually; everything above pools together.
const MAX_MANA: usize = 12;

/// Target number of cards per cost bucket: 0, 1, ..., 6, and 7+.
const COST_TARGETS: [i32; 8] = [1, 1, 5, 6, 7, 5, 4, 3];

/// Target number of creatures in the drafted deck.
const CREATURE_TARGET: i32 = 27;

/// Weight of the creature-count deviation against the curve deviation.
const CREATURE_WEIGHT: i32 = 6;

/// Mana-cost histogram of a set of drafted cards.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ManaCurve {
    counts: [i32; MAX_MANA + 1],
    creatures: i32,
}

impl ManaCurve {
    /// An empty curve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The curve of an already drafted deck.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut curve = Self::new();
        for card in cards {
            curve.add(card);
        }
        curve
    }

    /// Count a card into the curve.
    pub fn add(&mut self, card: &Card) {
        let bucket = card.cost.clamp(0, MAX_MANA as i32) as usize;
        self.counts[bucket] += 1;
        if card.category == CardCategory::Creature {
            self.creatures += 1;
        }
    }

    /// Total absolute deviation from the target shape. Lower is better.
    #[must_use]
    pub fn deviation(&self) -> i32 {
        let seven_plus: i32 = self.counts[7..].iter().sum();

        let curve_deviation: i32 = (0..7)
            .map(|cost| (self.counts[cost] - COST_TARGETS[cost]).abs())
            .sum::<i32>()
            + (seven_plus - COST_TARGETS[7]).abs();

        curve_deviation + CREATURE_WEIGHT * (self.creatures - CREATURE_TARGET).abs()
    }
}

/// Stateful draft picker: accumulates the drafted deck across draft turns.
#[derive(Clone, Debug, Default)]
pub struct DraftPicker {
    drafted: Vec<Card>,
}

impl DraftPicker {
    /// A picker with an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards drafted so far.
    #[must_use]
    pub fn drafted(&self) -> &[Card] {
        &self.drafted
    }

    /// Pick from the offered candidates and remember the choice.
    ///
    /// Returns the index of the chosen candidate. Ties keep the earliest
    /// candidate.
    pub fn pick(&mut self, choices: &[Card]) -> usize {
        assert!(!choices.is_empty(), "draft turn with no candidates");

        let mut best = 0;
        let mut best_deviation = i32::MAX;

        for (index, candidate) in choices.iter().enumerate() {
            let mut curve = ManaCurve::from_cards(&self.drafted);
            curve.add(candidate);

            let deviation = curve.deviation();
            if deviation < best_deviation {
                best_deviation = deviation;
                best = index;
            }
        }

        self.drafted.push(choices[best].clone());
        best
    }
}
