//! Adjacency and attack patterns.
//!
//! Sliding rays stop *before* the first occupied square: only empty squares
//! count as attacked. The same holds for the king. This is the coverage
//! notion the stalemate check needs, not full chess capture semantics.

use crate::{Board, PieceKind, Square, SquareSet};

/// The 8 king steps around a square
pub const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

pub const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

pub const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
];

/// The square itself plus its in-bounds neighbours (up to 9 squares)
pub fn adjacency(square: Square) -> SquareSet {
    let mut set = SquareSet::empty();
    set.insert(square);
    for &(dr, dc) in &KING_STEPS {
        if let Some(next) = square.offset(dr, dc) {
            set.insert(next);
        }
    }
    set
}

/// Squares attacked by a piece of `kind` standing on `from`, given the
/// board's current occupancy
pub fn attacks(board: &Board, kind: PieceKind, from: Square) -> SquareSet {
    let mut set = SquareSet::empty();
    match kind {
        PieceKind::King => {
            for &(dr, dc) in &KING_STEPS {
                if let Some(next) = from.offset(dr, dc) {
                    if board.is_empty(next) {
                        set.insert(next);
                    }
                }
            }
        }
        PieceKind::Queen => {
            slide(board, from, &ROOK_DIRS, &mut set);
            slide(board, from, &BISHOP_DIRS, &mut set);
        }
        PieceKind::Rook => slide(board, from, &ROOK_DIRS, &mut set),
        PieceKind::Bishop => slide(board, from, &BISHOP_DIRS, &mut set),
        PieceKind::Knight => {
            for &(dr, dc) in &KNIGHT_DELTAS {
                if let Some(next) = from.offset(dr, dc) {
                    set.insert(next);
                }
            }
        }
    }
    set
}

fn slide(board: &Board, from: Square, dirs: &[(i32, i32)], set: &mut SquareSet) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            if !board.is_empty(sq) {
                break;
            }
            set.insert(sq);
            cur = sq.offset(dr, dc);
        }
    }
}
