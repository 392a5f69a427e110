//! Piece identification.
//!
//! Every physical piece on the board has a unique `PieceId`, allocated by the
//! game in setup order. The id is the piece's identity for its whole life:
//! ownership lists, the moved-pawn set, and the board grid all store ids,
//! never copies of the piece itself.
//!
//! ```
//! use rust_chess_core::core::PieceId;
//!
//! let first = PieceId::new(0);
//! assert_eq!(first.next(), PieceId::new(1));
//! assert_eq!(first.raw(), 0);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a piece ID from its raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID allocated right after this one.
    ///
    /// Panics if the ID space is exhausted.
    #[must_use]
    pub const fn next(self) -> Self {
        match self.0.checked_add(1) {
            Some(id) => Self(id),
            None => panic!("Piece id space exhausted"),
        }
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}
