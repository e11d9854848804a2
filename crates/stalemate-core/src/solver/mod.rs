//! Solver orchestrator.
//!
//! Ranks candidate squares, runs the backtracking search, then parks the
//! pieces the search did not need where they cannot disturb the result.

mod leftover;
mod prioritize;
mod search;
mod types;
mod validate;

use crate::ranker::rank_candidates;
use crate::{PieceKind, Result, Square, StalemateError};

pub use leftover::{place_leftover_pieces, remove_used_pieces};
pub use prioritize::prioritize;
pub use search::{Candidates, SearchState};
pub use types::{SearchBudget, SearchOutcome, Solution, SolutionReport, SolverConfig};
pub use validate::{is_stalemate, uncovered_squares};

/// Stalemate placement solver. Stateless: all search state is per call.
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with the default configuration
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Create a solver with custom configuration
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Place `pieces` around a defending king on `king`.
    ///
    /// `pieces` must contain exactly one attacking king. The returned
    /// placement is best effort; see [`Solution::is_stalemate`].
    pub fn solve(&self, king: Square, pieces: &[PieceKind]) -> Result<Solution> {
        let kings = pieces.iter().filter(|&&k| k == PieceKind::King).count();
        if kings != 1 {
            return Err(StalemateError::KingCount(kings));
        }

        let mut order = pieces.to_vec();
        if self.config.presort {
            prioritize(&mut order);
        }

        let mut state = SearchState::new(king, self.config.budget);
        let candidates = rank_candidates(state.board(), &order, state.adjacency());
        log::debug!(
            "solving king {} with {} pieces; candidates per kind: {:?}",
            king,
            order.len(),
            candidates
                .iter()
                .map(|(kind, squares)| (kind.symbol(), squares.len()))
                .collect::<Vec<_>>()
        );

        let found = state.search(&order, &candidates);
        let outcome = if found {
            SearchOutcome::Stalemate
        } else if state.budget_exceeded() {
            SearchOutcome::BudgetExceeded
        } else {
            SearchOutcome::Exhausted
        };
        let nodes_visited = state.nodes();
        log::debug!("search finished: {} after {} nodes", outcome, nodes_visited);

        state.recompute_exclusion();
        let leftovers = remove_used_pieces(&order, state.placement());
        let dropped = place_leftover_pieces(&mut state, &leftovers);

        let (board, placement) = state.into_parts();
        Ok(Solution {
            king,
            placement,
            board,
            outcome,
            nodes_visited,
            dropped,
        })
    }
}
