//! The flat Monte-Carlo turn planner.
//!
//! One planning round repeats until its deadline: clone the authoritative
//! state, extend a candidate turn with uniformly random legal actions
//! applied through the resolver until the clone has nothing left to do
//! (or someone is dead, or the deadline hits mid-rollout), score the
//! final clone, and keep the turn if it strictly beats the best so far.
//!
//! No statistics carry between rollouts and no tree is built; every
//! rollout restarts from the untouched authoritative state. The planner
//! only ever mutates its own clones.

use std::time::Instant;

use crate::engine::{apply, legal_actions, DuelRng, GameState, Side, Turn};

use super::config::PlannerConfig;
use super::eval::evaluate;
use super::stats::SearchStats;

/// Anytime turn planner.
///
/// Owns its RNG and statistics; one instance is reused across turns.
pub struct Planner {
    config: PlannerConfig,
    rng: DuelRng,
    stats: SearchStats,
}

impl Planner {
    /// Create a planner seeded from its configuration.
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        let rng = DuelRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::new(),
        }
    }

    /// Create a planner seeded from OS entropy (production play).
    #[must_use]
    pub fn from_entropy(config: PlannerConfig) -> Self {
        Self {
            config,
            rng: DuelRng::from_entropy(),
            stats: SearchStats::new(),
        }
    }

    /// Search for the best turn for `side` within the wall-clock budget.
    ///
    /// The authoritative `state` is read-only; only clones are mutated.
    /// With no completed rollout (or nothing legal to do) the result is
    /// the empty turn, which prints as PASS.
    pub fn plan(&mut self, state: &GameState, side: Side) -> Turn {
        let start = Instant::now();
        let deadline = start + self.config.budget();
        self.stats.reset();

        // Doing nothing is always available; rollouts must strictly beat it.
        let mut best = Turn::new();
        let mut best_score = evaluate(state, side);

        let mut rng = self.rng.fork();
        while !self.done(start) {
            let (turn, score) = rollout(state, side, deadline, &mut rng, &mut self.stats);
            self.stats.rollouts += 1;

            if score > best_score {
                best_score = score;
                best = turn;
                self.stats.improvements += 1;
            }
        }

        self.stats.best_score = best_score;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Has this round exhausted its deadline or rollout cap?
    fn done(&self, start: Instant) -> bool {
        if self.config.max_rollouts > 0 && self.stats.rollouts >= self.config.max_rollouts {
            return true;
        }
        start.elapsed() >= self.config.budget()
    }

    /// Statistics from the last planning round.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The planner's configuration.
    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

/// One rollout: drive a clone to exhaustion, return the turn and its score.
fn rollout(
    root: &GameState,
    side: Side,
    deadline: Instant,
    rng: &mut DuelRng,
    stats: &mut SearchStats,
) -> (Turn, f64) {
    let mut sim = root.clone();
    let mut turn = Turn::new();

    loop {
        if sim.is_game_over() || Instant::now() >= deadline {
            break;
        }

        let actions = legal_actions(&sim, side);
        if actions.is_empty() {
            break;
        }

        let action = actions[rng.gen_range_usize(0..actions.len())];
        apply(&mut sim, side, &action);
        turn.push(action);
        stats.actions += 1;
    }

    let score = evaluate(&sim, side);
    (turn, score)
}
