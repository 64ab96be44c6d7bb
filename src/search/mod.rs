//! Turn search: a flat Monte-Carlo planner under a wall-clock budget.
//!
//! ## Overview
//!
//! The planner never builds a tree and never carries statistics between
//! rollouts. Each rollout is an independent random playout of the acting
//! player's turn against the untouched authoritative state, scored by a
//! cheap heuristic; the best-scoring playout's action sequence is the
//! emitted turn. This keeps the search anytime (an answer exists after
//! the very first rollout, or before it: pass) and trivially bounded by
//! the deadline.
//!
//! ## Usage
//!
//! ```
//! use locm_agent::engine::{Card, GameState, Player, Side};
//! use locm_agent::search::{Planner, PlannerConfig};
//!
//! let state = GameState::new(
//!     [Player::new(30, 3), Player::new(30, 3)],
//!     vec![Card::creature(1, 3, 2, 2)],
//! );
//!
//! let mut planner = Planner::new(PlannerConfig::default().with_seed(7));
//! let turn = planner.plan(&state, Side::Me);
//! assert!(!turn.is_empty());
//! ```

pub mod config;
pub mod eval;
pub mod planner;
pub mod stats;

pub use config::PlannerConfig;
pub use eval::evaluate;
pub use planner::Planner;
pub use stats::SearchStats;
