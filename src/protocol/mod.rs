//! The line protocol the duel is played over.
//!
//! Input and output stay strictly at this boundary: inside the engine
//! everything is slot-addressed and typed, and nothing below this module
//! reads or writes text. The parser owns every `anyhow` error in the
//! crate; the engine itself asserts instead (its invariants are not
//! runtime conditions).

pub mod input;
pub mod output;

pub use input::{read_snapshot, Snapshot};
pub use output::{format_action, format_pick, format_turn};
