//! Standard move shapes.
//!
//! `StandardMoves` dispatches on `PieceKind` to one pure function per kind.
//! Sliding pieces walk each ray until they leave the board, stopping after
//! the first occupied square (which is included, friend or foe). Knights and
//! kings emit their offsets unfiltered. Pawns consult the board for forward
//! blocking and diagonal captures, and the tracker for the double step.

use crate::core::{PieceInstance, PieceKind, Square};

use super::provider::{BoardView, Candidates, MoveProvider};

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The usual chess move shapes, minus castling, en passant, and promotion.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardMoves;

impl MoveProvider for StandardMoves {
    fn candidates(&self, view: &BoardView<'_>, piece: &PieceInstance, from: Square) -> Candidates {
        match piece.kind {
            PieceKind::Pawn => pawn(view, piece, from),
            PieceKind::Knight => offsets(from, &KNIGHT_OFFSETS),
            PieceKind::Bishop => slides(view, from, &BISHOP_DIRS),
            PieceKind::Rook => slides(view, from, &ROOK_DIRS),
            PieceKind::Queen => {
                let mut out = slides(view, from, &ROOK_DIRS);
                out.extend(slides(view, from, &BISHOP_DIRS));
                out
            }
            PieceKind::King => offsets(from, &KING_OFFSETS),
        }
    }
}

fn offsets(from: Square, deltas: &[(i8, i8)]) -> Candidates {
    deltas.iter().map(|&(dc, dr)| from.offset(dc, dr)).collect()
}

fn slides(view: &BoardView<'_>, from: Square, dirs: &[(i8, i8)]) -> Candidates {
    let mut out = Candidates::new();
    for &(dc, dr) in dirs {
        let mut sq = from.offset(dc, dr);
        while sq.is_on_board() {
            out.push(sq);
            if view.piece_at(sq).is_some() {
                break;
            }
            sq = sq.offset(dc, dr);
        }
    }
    out
}

fn pawn(view: &BoardView<'_>, piece: &PieceInstance, from: Square) -> Candidates {
    let forward: i8 = if piece.owner.is_white() { 1 } else { -1 };
    let mut out = Candidates::new();

    let one = from.offset(0, forward);
    if view.is_empty(one) {
        out.push(one);
        let two = one.offset(0, forward);
        if !view.has_moved(piece.id) && view.is_empty(two) {
            out.push(two);
        }
    }

    for dc in [-1, 1] {
        let diag = from.offset(dc, forward);
        if view.is_opponent(diag, piece.owner) {
            out.push(diag);
        }
    }

    out
}
