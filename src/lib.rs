//! # locm-agent
//!
//! A simulation engine and turn planner for a two-player collectible card
//! duel played over discrete turns.
//!
//! ## Design Principles
//!
//! 1. **Exact rules**: combat and keyword resolution (guard, breakthrough,
//!    ward, drain, lethal, charge) reproduce the duel's arithmetic bit for
//!    bit. Preconditions are asserted, never silently patched.
//!
//! 2. **Legality oracle**: `engine::legal_actions` enumerates the complete
//!    set of legal actions for a state; nothing downstream re-filters.
//!
//! 3. **Value-copy cloning**: a rollout owns a full copy of the card array
//!    and players. No aliasing between the authoritative state and clones.
//!
//! 4. **Anytime search**: the planner is a flat Monte-Carlo loop under a
//!    wall-clock deadline. It always has an answer (worst case: pass).
//!
//! ## Modules
//!
//! - `engine`: cards, players, game state, actions, legality, resolution, RNG
//! - `search`: rollout planner, evaluator, configuration, statistics
//! - `draft`: mana-curve scoring for the draft phase
//! - `protocol`: line-oriented snapshot parsing and turn formatting

pub mod draft;
pub mod engine;
pub mod protocol;
pub mod search;

// Re-export commonly used types
pub use crate::engine::{
    Abilities, Action, Card, CardCategory, DuelRng, DuelRngState, GameState, Location, Player,
    Side, Target, Turn, BOARD_CAPACITY,
};

pub use crate::engine::{apply, legal_actions};

pub use crate::search::{evaluate, Planner, PlannerConfig, SearchStats};

pub use crate::draft::{DraftPicker, ManaCurve};

pub use crate::protocol::{format_pick, format_turn, read_snapshot, Snapshot};
