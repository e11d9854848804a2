//! Pieces the search did not need.

use super::search::SearchState;
use super::validate::uncovered_squares;
use crate::attacks::attacks;
use crate::{PieceKind, Placement, Square};
use std::collections::BTreeMap;

/// Pieces in `pieces` that are not accounted for by `placement`.
///
/// Exact multiset difference: each placed piece cancels one matching entry.
/// Survivors keep their input order.
pub fn remove_used_pieces(pieces: &[PieceKind], placement: &Placement) -> Vec<PieceKind> {
    let mut used: BTreeMap<PieceKind, usize> = placement
        .kinds()
        .map(|kind| (kind, placement.count(kind)))
        .collect();

    pieces
        .iter()
        .copied()
        .filter(|kind| match used.get_mut(kind) {
            Some(n) if *n > 0 => {
                *n -= 1;
                false
            }
            _ => true,
        })
        .collect()
}

/// Put each leftover piece on the first square (row-major) where it leaves
/// the king's situation exactly as it was: outside the exclusion set,
/// attacking nothing around the king, and not blocking any ray that covers
/// the king's neighbourhood.
///
/// Returns the pieces for which no such square exists.
pub fn place_leftover_pieces(state: &mut SearchState, pieces: &[PieceKind]) -> Vec<PieceKind> {
    let mut dropped = Vec::new();

    for &kind in pieces {
        match harmless_square(state, kind) {
            Some(square) => {
                log::trace!("leftover {} on {}", kind, square);
                state.occupy(kind, square);
            }
            None => {
                log::warn!("no harmless square left for {}, dropping it", kind);
                dropped.push(kind);
            }
        }
    }

    dropped
}

fn harmless_square(state: &mut SearchState, kind: PieceKind) -> Option<Square> {
    let before = uncovered_squares(state.board(), state.king(), state.placement());

    for square in Square::all() {
        if state.exclusion().contains(square) {
            continue;
        }
        let attacked = attacks(state.board(), kind, square);
        if !attacked.intersection(state.adjacency()).is_empty() {
            continue;
        }

        state.occupy(kind, square);
        let after = uncovered_squares(state.board(), state.king(), state.placement());
        state.vacate(kind);

        if after == before {
            return Some(square);
        }
    }

    None
}
