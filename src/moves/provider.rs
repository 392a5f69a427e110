//! The move-shape seam.
//!
//! A `MoveProvider` proposes raw candidate destinations for a piece. The
//! core does not trust that list: it drops off-board squares and squares
//! held by the mover's own side before anything is shown to a player.
//!
//! Providers see the game through a read-only `BoardView`, which is enough
//! to stop sliding pieces at blockers and to gate the pawn double step.

use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::{PieceId, PieceInstance, PieceRegistry, Player, PlayerId, PlayerMap, Square};
use crate::rules::PawnMoveTracker;

/// Candidate destinations. A queen in the open has 27.
pub type Candidates = SmallVec<[Square; 32]>;

/// Read-only window onto the game state.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    board: &'a BoardState,
    pieces: &'a PieceRegistry,
    players: &'a PlayerMap<Player>,
    moved: &'a PawnMoveTracker,
}

impl<'a> BoardView<'a> {
    pub fn new(
        board: &'a BoardState,
        pieces: &'a PieceRegistry,
        players: &'a PlayerMap<Player>,
        moved: &'a PawnMoveTracker,
    ) -> Self {
        Self {
            board,
            pieces,
            players,
            moved,
        }
    }

    #[must_use]
    pub fn board(&self) -> &'a BoardState {
        self.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &'a Player {
        &self.players[id]
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&'a PieceInstance> {
        self.pieces.get(id)
    }

    /// The piece on a square. Off-board squares are empty.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&'a PieceInstance> {
        self.board.piece_at(square).and_then(|id| self.pieces.get(id))
    }

    /// Check whether a square is on the board and empty.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board.is_empty(square)
    }

    /// Check whether a square holds a piece not owned by `player`.
    #[must_use]
    pub fn is_opponent(&self, square: Square, player: PlayerId) -> bool {
        self.piece_at(square).map_or(false, |p| p.owner != player)
    }

    #[must_use]
    pub fn has_moved(&self, piece: PieceId) -> bool {
        self.moved.has_moved(piece)
    }
}

/// Source of raw candidate destinations, one shape per piece kind.
///
/// Implementations may return off-board squares, squares occupied by either
/// side (including `from` itself), and duplicates.
pub trait MoveProvider: Send {
    fn candidates(&self, view: &BoardView<'_>, piece: &PieceInstance, from: Square) -> Candidates;
}
