//! Duel simulation engine: entities, state, legality, and resolution.
//!
//! The engine is deliberately split along the planner's control flow:
//!
//! - `card` / `player`: the value types a snapshot is made of
//! - `state`: the authoritative snapshot plus derived board caches
//! - `action`: the closed action sum type and the `Turn` sequence
//! - `legal`: the single-ply legality oracle (read-only)
//! - `resolver`: the one mutation point, with asserted preconditions
//! - `rng`: seedable, forkable randomness for rollouts

pub mod action;
pub mod card;
pub mod legal;
pub mod player;
pub mod resolver;
pub mod rng;
pub mod state;

pub use action::{Action, Target, Turn};
pub use card::{Abilities, Card, CardCategory, Location};
pub use legal::legal_actions;
pub use player::{Player, Side};
pub use resolver::apply;
pub use rng::{DuelRng, DuelRngState};
pub use state::{GameState, BOARD_CAPACITY};
