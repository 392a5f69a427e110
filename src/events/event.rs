//! Game event types.
//!
//! Events describe state changes after they happen. The core publishes one
//! event per change; presentation layers react to them (animate a move,
//! remove a captured piece, show the winner) but never feed anything back.

use serde::{Deserialize, Serialize};

use crate::core::{PieceInstance, PlayerId, Square};

/// A state change published by the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A piece was put on the board during setup.
    PiecePlaced { piece: PieceInstance, square: Square },

    /// A piece was relocated.
    PieceMoved {
        piece: PieceInstance,
        from: Square,
        to: Square,
    },

    /// A piece was taken off the board by the capturing player.
    PieceCaptured { piece: PieceInstance, by: PlayerId },

    /// A king was captured; the game is over.
    GameOver { winner: PlayerId },

    /// The turn passed; `current` is now to move.
    TurnEnded { current: PlayerId, turn_number: u32 },
}

impl GameEvent {
    /// The piece this event concerns, if any.
    #[must_use]
    pub fn piece(&self) -> Option<&PieceInstance> {
        match self {
            GameEvent::PiecePlaced { piece, .. }
            | GameEvent::PieceMoved { piece, .. }
            | GameEvent::PieceCaptured { piece, .. } => Some(piece),
            GameEvent::GameOver { .. } | GameEvent::TurnEnded { .. } => None,
        }
    }

    /// Whether this event ends the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::GameOver { .. })
    }
}
