//! Capture resolution.
//!
//! Capturing takes the occupant off the board and records it against the
//! capturing player. Ownership does not move: the piece stays in its
//! owner's list and is additionally listed in the capturer's captures.
//! Taking a king ends the game in the capturer's favor.

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::core::{PieceInstance, PieceRegistry, Player, PlayerId, PlayerMap, Square};
use crate::events::{GameEvent, GameObserver};

use super::phase::GamePhase;

/// Outcome of a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureEvent {
    /// The piece taken off the board.
    pub captured: PieceInstance,
    /// Where it stood.
    pub square: Square,
    /// Who took it.
    pub by: PlayerId,
    /// Set when the captured piece was a king.
    pub winner: Option<PlayerId>,
}

impl CaptureEvent {
    #[must_use]
    pub fn ends_game(&self) -> bool {
        self.winner.is_some()
    }
}

/// Removes captured pieces and detects the end of the game.
pub struct CaptureResolver;

impl CaptureResolver {
    /// Capture whatever stands on `square` for `capturer`.
    ///
    /// Panics if the square is empty, if the occupant belongs to
    /// `capturer`, or if the game is not in progress.
    pub fn resolve(
        board: &mut BoardState,
        pieces: &PieceRegistry,
        players: &mut PlayerMap<Player>,
        phase: &mut GamePhase,
        square: Square,
        capturer: PlayerId,
        observer: &mut dyn GameObserver,
    ) -> CaptureEvent {
        assert!(
            phase.is_in_progress(),
            "Cannot capture at {} while game is {:?}",
            square,
            phase
        );
        let Some(occupant) = board.piece_at(square) else {
            panic!("No piece to capture at {}", square);
        };
        let Some(&captured) = pieces.get(occupant) else {
            panic!("Board holds unregistered {} at {}", occupant, square);
        };
        assert_ne!(
            captured.owner, capturer,
            "{} cannot capture its own {} at {}",
            capturer, captured, square
        );

        players[capturer].record_capture(captured.id);
        board.clear(square);
        observer.notify(&GameEvent::PieceCaptured {
            piece: captured,
            by: capturer,
        });

        let winner = if captured.is_king() {
            phase.finish(capturer);
            observer.notify(&GameEvent::GameOver { winner: capturer });
            Some(capturer)
        } else {
            None
        };

        CaptureEvent {
            captured,
            square,
            by: capturer,
            winner,
        }
    }
}
