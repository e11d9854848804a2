//! Greedy candidate ranking.
//!
//! For each piece kind, the squares outside the king's neighbourhood that
//! take the most squares away from the king. The search only tries these.

use crate::attacks::attacks;
use crate::{Board, PieceKind, Square, SquareSet};
use std::collections::BTreeMap;

/// Number of squares in `king_adjacency` a piece of `kind` on `square` covers
pub fn coverage(
    board: &Board,
    kind: PieceKind,
    square: Square,
    king_adjacency: &SquareSet,
) -> usize {
    let attacked = attacks(board, kind, square);
    king_adjacency.len() - king_adjacency.difference(&attacked).len()
}

/// All squares outside `king_adjacency` tying for the highest coverage, in
/// row-major order. Empty when no square covers anything.
pub fn best_squares(board: &Board, kind: PieceKind, king_adjacency: &SquareSet) -> Vec<Square> {
    let mut best = 0;
    let mut result = Vec::new();

    for square in Square::all() {
        if king_adjacency.contains(square) || !board.is_empty(square) {
            continue;
        }
        let score = coverage(board, kind, square, king_adjacency);
        if score == 0 {
            continue;
        }
        if score > best {
            best = score;
            result.clear();
            result.push(square);
        } else if score == best {
            result.push(square);
        }
    }

    result
}

/// Candidate lists for every distinct kind in `pieces`
pub fn rank_candidates(
    board: &Board,
    pieces: &[PieceKind],
    king_adjacency: &SquareSet,
) -> BTreeMap<PieceKind, Vec<Square>> {
    let mut candidates = BTreeMap::new();
    for &kind in pieces {
        candidates
            .entry(kind)
            .or_insert_with(|| best_squares(board, kind, king_adjacency));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::adjacency;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_best_squares_skip_adjacency() {
        let king = sq(1, 1);
        let board = Board::with_king(king);
        let adj = adjacency(king);

        for kind in PieceKind::ALL {
            let best = best_squares(&board, kind, &adj);
            assert!(!best.is_empty(), "{} should have candidates", kind);
            assert!(best.iter().all(|s| !adj.contains(*s)));
        }
    }

    #[test]
    fn test_best_squares_share_top_score() {
        let king = sq(1, 1);
        let board = Board::with_king(king);
        let adj = adjacency(king);

        for kind in PieceKind::ALL {
            let best = best_squares(&board, kind, &adj);
            let top = coverage(&board, kind, best[0], &adj);
            assert!(best.iter().all(|&s| coverage(&board, kind, s, &adj) == top));

            // Nothing outside the neighbourhood does better
            let max = Square::all()
                .filter(|s| !adj.contains(*s))
                .map(|s| coverage(&board, kind, s, &adj))
                .max()
                .unwrap();
            assert_eq!(top, max);
        }
    }

    #[test]
    fn test_king_candidates_cover_three_squares() {
        // Two squares away, an attacking king covers one side of the box
        let king = sq(1, 1);
        let board = Board::with_king(king);
        let adj = adjacency(king);

        let best = best_squares(&board, PieceKind::King, &adj);
        assert!(best.contains(&sq(1, 3)));
        assert!(best.contains(&sq(3, 1)));
        assert_eq!(coverage(&board, PieceKind::King, sq(1, 3), &adj), 3);
    }

    #[test]
    fn test_candidates_are_row_major() {
        let king = sq(4, 4);
        let board = Board::with_king(king);
        let adj = adjacency(king);

        let best = best_squares(&board, PieceKind::Rook, &adj);
        let mut sorted = best.clone();
        sorted.sort_by_key(|s| s.index());
        assert_eq!(best, sorted);
    }

    #[test]
    fn test_empty_when_nothing_reaches() {
        let board = Board::new();
        let best = best_squares(&board, PieceKind::Knight, &SquareSet::empty());
        assert!(best.is_empty());
    }

    #[test]
    fn test_rank_candidates_one_entry_per_kind() {
        let king = sq(2, 1);
        let board = Board::with_king(king);
        let adj = adjacency(king);
        let pieces = [
            PieceKind::King,
            PieceKind::Queen,
            PieceKind::Queen,
            PieceKind::Knight,
        ];
        let ranked = rank_candidates(&board, &pieces, &adj);
        assert_eq!(ranked.len(), 3);
        assert_eq!(
            ranked[&PieceKind::Queen],
            best_squares(&board, PieceKind::Queen, &adj)
        );
    }
}
