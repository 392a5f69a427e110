//! Piece registry: allocation and lookup of piece instances by id.
//!
//! The registry keeps every piece created during setup, including captured
//! ones, so that ids stored in capture lists always resolve to a kind and an
//! owner. Whether a piece is still in play is a question for the board.

use rustc_hash::FxHashMap;

use super::entity::PieceId;
use super::piece::{PieceInstance, PieceKind};
use super::player::PlayerId;

/// All pieces of one game, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct PieceRegistry {
    pieces: FxHashMap<PieceId, PieceInstance>,
    next_id: PieceId,
}

impl PieceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a piece with the next free id.
    pub fn create(&mut self, kind: PieceKind, owner: PlayerId) -> PieceInstance {
        let id = self.next_id;
        self.next_id = id.next();
        let piece = PieceInstance::new(id, kind, owner);
        self.pieces.insert(id, piece);
        piece
    }

    /// Look up a piece by id.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&PieceInstance> {
        self.pieces.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.contains_key(&id)
    }

    /// Number of pieces ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
