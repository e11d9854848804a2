use crate::{Board, PieceKind, Placement, Square};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits on how much work one search may do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchBudget {
    /// Maximum number of search nodes (None = unlimited)
    pub max_nodes: Option<u64>,
    /// Wall-clock limit for the backtracking phase (None = unlimited)
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn nodes(max_nodes: u64) -> Self {
        Self {
            max_nodes: Some(max_nodes),
            time_limit: None,
        }
    }

    pub fn time(limit: Duration) -> Self {
        Self {
            max_nodes: None,
            time_limit: Some(limit),
        }
    }
}

/// Configuration for the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Reorder pieces by attack power before searching
    pub presort: bool,
    /// Work limits for the backtracking phase
    pub budget: SearchBudget,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::greedy()
    }
}

impl SolverConfig {
    /// Search pieces in the order given
    pub fn greedy() -> Self {
        Self {
            presort: false,
            budget: SearchBudget::unlimited(),
        }
    }

    /// Search the strongest pieces first
    pub fn presorted() -> Self {
        Self {
            presort: true,
            budget: SearchBudget::unlimited(),
        }
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }
}

/// How the backtracking phase ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A stalemate was reached
    Stalemate,
    /// Every candidate combination was tried without success
    Exhausted,
    /// The search budget ran out first
    BudgetExceeded,
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Stalemate => write!(f, "stalemate"),
            SearchOutcome::Exhausted => write!(f, "search exhausted"),
            SearchOutcome::BudgetExceeded => write!(f, "search budget exceeded"),
        }
    }
}

/// Result of a placement computation.
///
/// The placement is best effort: check [`Solution::is_stalemate`] before
/// relying on it.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Square of the defending king
    pub king: Square,
    /// Every attacking piece that made it onto the board
    pub placement: Placement,
    /// Final board, defending king included
    pub board: Board,
    /// How the backtracking phase ended
    pub outcome: SearchOutcome,
    /// Search nodes visited
    pub nodes_visited: u64,
    /// Leftover pieces for which no harmless square was found
    pub dropped: Vec<PieceKind>,
}

impl Solution {
    /// Re-run the stalemate check on the final placement
    pub fn is_stalemate(&self) -> bool {
        super::validate::is_stalemate(self.king, &self.placement)
    }

    /// Serializable summary of this solution
    pub fn report(&self) -> SolutionReport {
        SolutionReport {
            king: self.king,
            placement: self.placement.clone(),
            outcome: self.outcome,
            stalemate: self.is_stalemate(),
            nodes_visited: self.nodes_visited,
            dropped: self.dropped.clone(),
        }
    }
}

/// Wire form of a [`Solution`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub king: Square,
    pub placement: Placement,
    pub outcome: SearchOutcome,
    pub stalemate: bool,
    pub nodes_visited: u64,
    pub dropped: Vec<PieceKind>,
}
