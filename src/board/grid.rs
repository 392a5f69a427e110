//! The 8×8 board grid.
//!
//! `BoardState` maps every square to the piece standing on it, if any. It is
//! the single record of piece location: pieces do not know their square, so
//! `square_of` scans the grid. At 64 cells no reverse index is kept.
//!
//! Out-of-range squares read as empty rather than failing, so callers can
//! probe candidate squares without checking bounds first.

use serde::{Deserialize, Serialize};

use crate::core::{PieceId, Square, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// Grid of optional piece ids, indexed `[column][row]`.
///
/// ## Usage
///
/// ```
/// use rust_chess_core::board::BoardState;
/// use rust_chess_core::core::{PieceId, Square};
///
/// let mut board = BoardState::new();
/// board.place_piece(PieceId(0), Square::new(0, 0));
///
/// assert_eq!(board.piece_at(Square::new(0, 0)), Some(PieceId(0)));
/// assert_eq!(board.square_of(PieceId(0)), Some(Square::new(0, 0)));
/// assert_eq!(board.piece_at(Square::new(-1, 0)), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    cells: [[Option<PieceId>; SIZE]; SIZE],
}

impl BoardState {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a piece during setup.
    ///
    /// Panics if the square is off the board or already occupied.
    pub fn place_piece(&mut self, piece: PieceId, square: Square) {
        let Some((col, row)) = square.indices() else {
            panic!("Cannot place {} off the board at {}", piece, square);
        };
        if let Some(existing) = self.cells[col][row] {
            panic!("Cannot place {} at {}: occupied by {}", piece, square, existing);
        }
        self.cells[col][row] = Some(piece);
    }

    /// Get the piece on a square. Off-board squares are empty.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        let (col, row) = square.indices()?;
        self.cells[col][row]
    }

    /// Check whether a square is on the board and empty.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        square.is_on_board() && self.piece_at(square).is_none()
    }

    /// Find the square a piece stands on.
    ///
    /// Returns `None` if the piece is not on the board (e.g. captured).
    #[must_use]
    pub fn square_of(&self, piece: PieceId) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some(piece))
    }

    /// Iterate over occupied squares, column-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Empty a square, returning what stood there.
    ///
    /// Panics if the square is off the board.
    pub(crate) fn clear(&mut self, square: Square) -> Option<PieceId> {
        let (col, row) = Self::cell(square);
        self.cells[col][row].take()
    }

    /// Put a piece on a square, overwriting the cell.
    ///
    /// Panics if the square is off the board.
    pub(crate) fn set(&mut self, square: Square, piece: PieceId) {
        let (col, row) = Self::cell(square);
        self.cells[col][row] = Some(piece);
    }

    fn cell(square: Square) -> (usize, usize) {
        match square.indices() {
            Some(idx) => idx,
            None => panic!("Square {} is off the board", square),
        }
    }
}
