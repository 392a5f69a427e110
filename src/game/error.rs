//! Rejections from the checked move transaction.

use thiserror::Error;

use crate::core::{PieceId, PlayerId, Square};

/// Why `Game::play` refused a move. The game is unchanged when one of these
/// is returned.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("game has not started")]
    NotStarted,
    #[error("game is over, {winner} won")]
    GameOver { winner: PlayerId },
    #[error("unknown piece {0}")]
    UnknownPiece(PieceId),
    #[error("{0} has been captured")]
    PieceCaptured(PieceId),
    #[error("{piece} does not belong to {current}")]
    NotYourPiece { piece: PieceId, current: PlayerId },
    #[error("{to} is not a legal destination for {piece}")]
    IllegalDestination { piece: PieceId, to: Square },
}
