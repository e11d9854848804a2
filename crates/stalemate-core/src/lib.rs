//! Stalemate placement engine.
//!
//! Given the square of a lone defending king and a set of attacking pieces,
//! places the pieces so that the king has no legal move and is not in check.
//!
//! ```
//! use stalemate_core::{PieceKind, Solver, Square};
//!
//! let king = Square::new(1, 1).unwrap();
//! let pieces = [PieceKind::King, PieceKind::Queen, PieceKind::Queen];
//! let solution = Solver::new().solve(king, &pieces).unwrap();
//! assert!(solution.is_stalemate());
//! ```

pub mod attacks;
mod board;
mod error;
mod generator;
mod placement;
pub mod ranker;
mod solver;
mod square_set;

#[cfg(test)]
mod tests;

pub use board::{Board, Cell, PieceKind, Square, BOARD_SIZE, SQUARE_COUNT};
pub use error::{Result, StalemateError};
pub use generator::{Generator, GeneratorConfig, Problem, MAX_PIECES};
pub use placement::Placement;
pub use solver::{
    is_stalemate, place_leftover_pieces, prioritize, remove_used_pieces, uncovered_squares,
    Candidates, SearchBudget, SearchOutcome, SearchState, Solution, SolutionReport, Solver,
    SolverConfig,
};
pub use square_set::{SquareSet, SquareSetIter};
