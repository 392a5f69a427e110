//! Board coordinates.
//!
//! A `Square` is a (column, row) pair. Coordinates are signed so that move
//! shapes can describe destinations that fall off the board; only squares
//! with both coordinates in `0..8` are on the board.

use serde::{Deserialize, Serialize};

/// Number of columns and rows on the board.
pub const BOARD_SIZE: i8 = 8;

/// A grid cell addressed by (column, row).
///
/// ```
/// use rust_chess_core::core::Square;
///
/// let e2 = Square::new(4, 1);
/// assert!(e2.is_on_board());
/// assert_eq!(e2.name(), Some("e2".to_string()));
///
/// let off = e2.offset(0, -2);
/// assert!(!off.is_on_board());
/// assert_eq!(off.name(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub col: i8,
    pub row: i8,
}

impl Square {
    #[must_use]
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Check that both coordinates lie in `0..8`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.col >= 0 && self.col < BOARD_SIZE && self.row >= 0 && self.row < BOARD_SIZE
    }

    /// The square displaced by `(dc, dr)`. May be off the board.
    #[must_use]
    pub const fn offset(self, dc: i8, dr: i8) -> Self {
        Self {
            col: self.col.saturating_add(dc),
            row: self.row.saturating_add(dr),
        }
    }

    /// Grid indices for an on-board square.
    #[must_use]
    pub(crate) fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.col as usize, self.row as usize))
        } else {
            None
        }
    }

    /// Algebraic name (`a1`..`h8`) for on-board squares.
    #[must_use]
    pub fn name(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Some(format!("{file}{rank}"))
    }

    /// Iterate over all 64 on-board squares, column-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|col| (0..BOARD_SIZE).map(move |row| Square::new(col, row)))
    }
}

impl From<(i8, i8)> for Square {
    fn from((col, row): (i8, i8)) -> Self {
        Self::new(col, row)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Square::new(0, 0).is_on_board());
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(-1, 0).is_on_board());
        assert!(!Square::new(0, -1).is_on_board());
        assert!(!Square::new(8, 3).is_on_board());
        assert!(!Square::new(3, 8).is_on_board());
    }

    #[test]
    fn test_offset() {
        let sq = Square::new(3, 3);
        assert_eq!(sq.offset(1, 2), Square::new(4, 5));
        assert_eq!(sq.offset(-4, 0), Square::new(-1, 3));
    }

    #[test]
    fn test_offset_saturates() {
        let sq = Square::new(i8::MAX, i8::MIN);
        assert_eq!(sq.offset(1, -1), Square::new(i8::MAX, i8::MIN));
        assert!(!sq.offset(1, -1).is_on_board());
    }

    #[test]
    fn test_indices() {
        assert_eq!(Square::new(2, 5).indices(), Some((2, 5)));
        assert_eq!(Square::new(-1, 5).indices(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Square::new(0, 0).name().as_deref(), Some("a1"));
        assert_eq!(Square::new(7, 7).name().as_deref(), Some("h8"));
        assert_eq!(Square::new(4, 3).name().as_deref(), Some("e4"));
    }

    #[test]
    fn test_all_covers_board() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert!(squares.iter().all(|sq| sq.is_on_board()));
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[1], Square::new(0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Square::new(-1, -1)), "(-1,-1)");
    }

    #[test]
    fn test_serialization() {
        let sq = Square::new(3, 6);
        let json = serde_json::to_string(&sq).unwrap();
        let deserialized: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(sq, deserialized);
    }
}
