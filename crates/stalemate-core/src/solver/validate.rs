//! Stalemate check.

use crate::attacks::{adjacency, attacks};
use crate::{Board, Placement, Square, SquareSet};

/// Squares of the king's neighbourhood (its own square included) that no
/// placed piece attacks on `board`
pub fn uncovered_squares(board: &Board, king: Square, placement: &Placement) -> SquareSet {
    placement
        .iter()
        .fold(adjacency(king), |remaining, (kind, square)| {
            remaining.difference(&attacks(board, kind, square))
        })
}

/// True if the king at `king` is stalemated by `placement`: every square of
/// its neighbourhood is covered except its own.
///
/// Malformed placements (two pieces on one square, or a piece on the king)
/// are never a stalemate.
pub fn is_stalemate(king: Square, placement: &Placement) -> bool {
    if !placement.is_well_formed(king) {
        return false;
    }
    let board = placement.to_board(king);
    is_stalemate_on(&board, king, placement)
}

/// Same check against a board the caller keeps in sync with `placement`
pub(crate) fn is_stalemate_on(board: &Board, king: Square, placement: &Placement) -> bool {
    let remaining = uncovered_squares(board, king, placement);
    remaining.len() == 1 && remaining.contains(king)
}
