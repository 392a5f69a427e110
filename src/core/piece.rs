//! Piece kinds and piece instances.
//!
//! A `PieceInstance` is one physical piece: its identity, its kind, and the
//! player that owns it. Where the piece stands is not stored here; the
//! board is the only record of location.

use serde::{Deserialize, Serialize};

use super::entity::PieceId;
use super::player::PlayerId;

/// The six kinds of piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All kinds, in declaration order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Single-letter symbol, uppercase for White and lowercase for Black.
    #[must_use]
    pub fn symbol(self, owner: PlayerId) -> char {
        let c = match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        if owner.is_white() {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// One physical piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceInstance {
    pub id: PieceId,
    pub kind: PieceKind,
    /// Back-reference to the owning player.
    pub owner: PlayerId,
}

impl PieceInstance {
    #[must_use]
    pub const fn new(id: PieceId, kind: PieceKind, owner: PlayerId) -> Self {
        Self { id, kind, owner }
    }

    #[must_use]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    #[must_use]
    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    #[must_use]
    pub fn symbol(&self) -> char {
        self.kind.symbol(self.owner)
    }
}

impl std::fmt::Display for PieceInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} #{}", self.owner, self.kind, self.id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(PieceKind::Knight.symbol(PlayerId::WHITE), 'N');
        assert_eq!(PieceKind::Knight.symbol(PlayerId::BLACK), 'n');
        assert_eq!(PieceKind::King.symbol(PlayerId::BLACK), 'k');
    }

    #[test]
    fn test_kind_predicates() {
        let king = PieceInstance::new(PieceId(4), PieceKind::King, PlayerId::WHITE);
        let pawn = PieceInstance::new(PieceId(8), PieceKind::Pawn, PlayerId::BLACK);

        assert!(king.is_king());
        assert!(!king.is_pawn());
        assert!(pawn.is_pawn());
        assert_eq!(pawn.symbol(), 'p');
    }

    #[test]
    fn test_display() {
        let rook = PieceInstance::new(PieceId(0), PieceKind::Rook, PlayerId::WHITE);
        assert_eq!(format!("{}", rook), "White Rook #0");
    }

    #[test]
    fn test_serialization() {
        let queen = PieceInstance::new(PieceId(19), PieceKind::Queen, PlayerId::BLACK);
        let json = serde_json::to_string(&queen).unwrap();
        let deserialized: PieceInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(queen, deserialized);
    }
}
