//! Move shapes: where a piece could go before board-aware filtering.
//!
//! - `MoveProvider`: the seam the core calls for raw candidates
//! - `BoardView`: the read-only state providers may consult
//! - `StandardMoves`: the bundled provider for the six standard kinds

mod provider;
mod shapes;

pub use provider::{BoardView, Candidates, MoveProvider};
pub use shapes::StandardMoves;
