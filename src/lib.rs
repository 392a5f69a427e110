//! # rust-chess-core
//!
//! Authoritative state for a two-player chess-like board game: piece
//! placement on an 8×8 grid, turn order, first-move tracking for pawns,
//! legal-destination filtering, captures, and win detection.
//!
//! ## Design Principles
//!
//! 1. **Single Source of Truth**: The board grid is the only record of where
//!    a piece stands. Pieces never store their square.
//!
//! 2. **Shapes Are Pluggable**: Per-kind move shapes come from a
//!    `MoveProvider`. The core only filters (bounds, friendly occupancy)
//!    and applies.
//!
//! 3. **Simplified Rules**: Capturing the king wins. There is no check,
//!    castling, en passant, or promotion.
//!
//! 4. **No Globals**: The presentation layer owns a `Game` and passes it
//!    around; notifications flow back through a `GameObserver`.
//!
//! ## Modules
//!
//! - `core`: Piece ids, players, squares, piece kinds, configuration
//! - `board`: The 8×8 grid
//! - `moves`: Move-provider seam and the standard shapes
//! - `rules`: Turns, pawn tracking, move execution, captures, lifecycle
//! - `events`: Outbound notifications
//! - `game`: The facade, its builder, and move errors

pub mod core;
pub mod board;
pub mod moves;
pub mod rules;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, PieceId, PieceInstance, PieceKind, Player, PlayerId, PlayerMap, Square,
};

pub use crate::board::BoardState;

pub use crate::moves::{BoardView, Candidates, MoveProvider, StandardMoves};

pub use crate::rules::{
    CaptureEvent, GamePhase, MoveRecord, PawnMoveTracker, TurnEngine,
};

pub use crate::events::{EventLog, GameEvent, GameObserver, NullObserver};

pub use crate::game::{Game, GameBuilder, MoveError, MoveOutcome};
