//! Game rules: turns, first-move tracking, move filtering, captures, and
//! the game lifecycle.
//!
//! Each component mutates only the state it is handed, so the `Game` facade
//! decides what is borrowed when and the borrow checker keeps the pieces of
//! a move transaction from interleaving.

pub mod turn;
pub mod pawns;
pub mod phase;
pub mod executor;
pub mod capture;

pub use turn::TurnEngine;
pub use pawns::PawnMoveTracker;
pub use phase::GamePhase;
pub use executor::{MoveExecutor, MoveRecord};
pub use capture::{CaptureEvent, CaptureResolver};
