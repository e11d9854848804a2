//! Backtracking placement search.
//!
//! One `SearchState` per solve owns the board, the placement and the
//! exclusion set. Every trial is undone on the failure path before the
//! frame returns, so the three stay in sync.

use super::types::SearchBudget;
use super::validate::is_stalemate_on;
use crate::attacks::adjacency;
use crate::{Board, Cell, PieceKind, Placement, Square, SquareSet};
use std::collections::BTreeMap;
use std::time::Instant;

/// Ranked candidate squares per piece kind
pub type Candidates = BTreeMap<PieceKind, Vec<Square>>;

/// Mutable state of one placement computation
pub struct SearchState {
    king: Square,
    adjacency: SquareSet,
    board: Board,
    placement: Placement,
    exclusion: SquareSet,
    budget: SearchBudget,
    deadline: Option<Instant>,
    nodes: u64,
    budget_exceeded: bool,
}

impl SearchState {
    /// Board with only the defending king, nothing placed
    pub fn new(king: Square, budget: SearchBudget) -> Self {
        let adjacency = adjacency(king);
        Self {
            king,
            adjacency,
            board: Board::with_king(king),
            placement: Placement::new(),
            exclusion: adjacency,
            budget,
            deadline: None,
            nodes: 0,
            budget_exceeded: false,
        }
    }

    pub fn king(&self) -> Square {
        self.king
    }

    pub fn adjacency(&self) -> &SquareSet {
        &self.adjacency
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn exclusion(&self) -> &SquareSet {
        &self.exclusion
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn budget_exceeded(&self) -> bool {
        self.budget_exceeded
    }

    pub fn is_stalemate(&self) -> bool {
        is_stalemate_on(&self.board, self.king, &self.placement)
    }

    /// Consume the state, handing back the board and placement
    pub fn into_parts(self) -> (Board, Placement) {
        (self.board, self.placement)
    }

    /// Rebuild the exclusion set from the placement
    pub fn recompute_exclusion(&mut self) {
        self.exclusion = self.adjacency.union(&self.placement.occupied());
    }

    /// Put a piece on `square`
    pub fn occupy(&mut self, kind: PieceKind, square: Square) {
        self.board.set(square, Cell::Piece(kind));
        self.placement.push(kind, square);
        self.exclusion.insert(square);
    }

    /// Take back the last piece of `kind`
    pub fn vacate(&mut self, kind: PieceKind) {
        if let Some(square) = self.placement.pop(kind) {
            self.board.set(square, Cell::Empty);
        }
        self.recompute_exclusion();
    }

    /// Try to place `pieces[index..]` on their candidate squares until the
    /// king is stalemated. Returns true on success, leaving the winning
    /// placement in place; on failure the state is as it was on entry.
    pub fn search(&mut self, pieces: &[PieceKind], candidates: &Candidates) -> bool {
        self.deadline = self.budget.time_limit.map(|limit| Instant::now() + limit);
        self.nodes = 0;
        self.budget_exceeded = false;
        self.place_from(pieces, candidates, 0)
    }

    fn place_from(&mut self, pieces: &[PieceKind], candidates: &Candidates, index: usize) -> bool {
        self.nodes += 1;

        if self.is_stalemate() {
            return true;
        }

        let Some(&kind) = pieces.get(index) else {
            return false;
        };

        if self.out_of_budget() {
            return false;
        }

        let squares = candidates.get(&kind).map(Vec::as_slice).unwrap_or(&[]);
        for &square in squares {
            if self.exclusion.contains(square) {
                continue;
            }

            log::trace!("depth {}: trying {} on {}", index, kind, square);
            self.occupy(kind, square);

            if self.place_from(pieces, candidates, index + 1) {
                return true;
            }

            self.vacate(kind);

            if self.budget_exceeded {
                break;
            }
        }

        self.recompute_exclusion();
        false
    }

    fn out_of_budget(&mut self) -> bool {
        if self.budget_exceeded {
            return true;
        }
        let over_nodes = self.budget.max_nodes.is_some_and(|max| self.nodes > max);
        let over_time = self.deadline.is_some_and(|deadline| Instant::now() >= deadline);
        if over_nodes || over_time {
            log::warn!(
                "search budget exceeded after {} nodes ({} pieces placed)",
                self.nodes,
                self.placement.len()
            );
            self.budget_exceeded = true;
        }
        self.budget_exceeded
    }
}
