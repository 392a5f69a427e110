//! Move validation and application.
//!
//! `legal_destinations` turns a provider's raw candidates into the squares a
//! piece may actually move to. `apply` relocates a piece to one of them.
//!
//! ## Friendliness
//!
//! An occupied candidate is dropped when its occupant is *not* one of the
//! opponent's pieces. That matches "occupant is one of the mover's own
//! pieces" only while the two owned lists are disjoint and together cover
//! every piece on the board; debug builds check this on every lookup.

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::core::{PieceId, PieceInstance, Square};
use crate::events::{GameEvent, GameObserver};
use crate::moves::{BoardView, Candidates, MoveProvider};

use super::pawns::PawnMoveTracker;

/// A completed relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: PieceInstance,
    pub from: Square,
    pub to: Square,
}

/// Filters candidate destinations and applies moves.
pub struct MoveExecutor;

impl MoveExecutor {
    /// Squares `piece` may move to, in provider order, without duplicates.
    ///
    /// Empty if the piece is unknown or no longer on the board.
    pub fn legal_destinations(
        view: &BoardView<'_>,
        provider: &dyn MoveProvider,
        piece: PieceId,
    ) -> Candidates {
        let mut legal = Candidates::new();

        let Some(mover) = view.piece(piece) else {
            return legal;
        };
        let Some(from) = view.board().square_of(piece) else {
            return legal;
        };

        let opponent = view.player(mover.owner.other());

        for square in provider.candidates(view, mover, from) {
            // Bounds before any occupancy lookup
            if !square.is_on_board() {
                continue;
            }

            if let Some(occupant) = view.board().piece_at(square) {
                let friendly = !opponent.owns(occupant);
                debug_assert_eq!(
                    friendly,
                    view.piece(occupant).map(|p| p.owner) == Some(mover.owner),
                    "ownership lists disagree about {}",
                    occupant
                );
                if friendly {
                    continue;
                }
            }

            if !legal.contains(&square) {
                legal.push(square);
            }
        }

        legal
    }

    /// Move `piece` to `to`.
    ///
    /// `to` must come from `legal_destinations` and any capture on it must
    /// already be resolved. Panics if the piece is not on the board or the
    /// destination is off the board or occupied.
    pub fn apply(
        board: &mut BoardState,
        moved: &mut PawnMoveTracker,
        piece: &PieceInstance,
        to: Square,
        observer: &mut dyn GameObserver,
    ) -> MoveRecord {
        let Some(from) = board.square_of(piece.id) else {
            panic!("Cannot move {}: not on the board", piece);
        };
        assert!(to.is_on_board(), "Cannot move {} off the board to {}", piece, to);
        if let Some(occupant) = board.piece_at(to) {
            panic!(
                "Cannot move {} to {}: occupied by {} (resolve the capture first)",
                piece, to, occupant
            );
        }

        if piece.is_pawn() && !moved.has_moved(piece.id) {
            moved.mark_moved(piece.id);
        }

        board.clear(from);
        board.set(to, piece.id);

        let record = MoveRecord {
            piece: *piece,
            from,
            to,
        };
        observer.notify(&GameEvent::PieceMoved {
            piece: record.piece,
            from,
            to,
        });
        record
    }
}
