//! First-move bookkeeping.
//!
//! The tracker remembers which pieces have completed a move. Only pawns are
//! ever recorded (their double step depends on it), and entries are never
//! removed.

use rustc_hash::FxHashSet;

use crate::core::PieceId;

/// Set of pieces that have moved at least once.
#[derive(Clone, Debug, Default)]
pub struct PawnMoveTracker {
    moved: FxHashSet<PieceId>,
}

impl PawnMoveTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a piece has moved.
    ///
    /// Returns true if the piece was not already recorded. Marking twice is
    /// a no-op.
    pub fn mark_moved(&mut self, piece: PieceId) -> bool {
        self.moved.insert(piece)
    }

    #[must_use]
    pub fn has_moved(&self, piece: PieceId) -> bool {
        self.moved.contains(&piece)
    }

    /// Number of recorded pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moved.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }
}
