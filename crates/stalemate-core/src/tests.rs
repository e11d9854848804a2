//! End-to-end placement scenarios

use crate::{
    is_stalemate, Generator, GeneratorConfig, PieceKind, SearchBudget, SearchOutcome, Solver,
    SolverConfig, Square,
};
use PieceKind::*;

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

fn count(pieces: &[PieceKind], kind: PieceKind) -> usize {
    pieces.iter().filter(|&&k| k == kind).count()
}

#[test]
fn test_two_queens_corner_king() {
    let king = sq(1, 1);
    let solution = Solver::new().solve(king, &[King, Queen, Queen]).unwrap();
    assert!(is_stalemate(king, &solution.placement));
}

#[test]
fn test_queen_and_bishop_corner_king() {
    let king = sq(1, 1);
    let solution = Solver::new().solve(king, &[King, Queen, Bishop]).unwrap();
    assert!(is_stalemate(king, &solution.placement));
}

#[test]
fn test_large_set_out_of_order_presorted() {
    let king = sq(2, 1);
    let pieces = [
        King, Knight, Bishop, Queen, Rook, Queen, Queen, Queen, Knight, Knight, Knight,
    ];
    let solution = Solver::with_config(SolverConfig::presorted())
        .solve(king, &pieces)
        .unwrap();

    assert_eq!(solution.outcome, SearchOutcome::Stalemate);
    assert!(is_stalemate(king, &solution.placement));
    assert!(solution.dropped.is_empty());
    assert_eq!(solution.placement.len(), pieces.len());
}

#[test]
fn test_large_set_in_order() {
    let king = sq(2, 1);
    let pieces = [
        King, Rook, Queen, Queen, Queen, Queen, Bishop, Knight, Knight, Knight, Knight,
    ];
    let solution = Solver::new().solve(king, &pieces).unwrap();

    assert!(is_stalemate(king, &solution.placement));
    assert_eq!(solution.placement.len() + solution.dropped.len(), pieces.len());
}

#[test]
fn test_max_queens() {
    let king = sq(2, 1);
    let pieces = [
        King, Queen, Queen, Queen, Queen, Queen, Rook, Rook, Rook, Rook, Rook,
    ];
    let solution = Solver::new().solve(king, &pieces).unwrap();
    assert!(is_stalemate(king, &solution.placement));
}

#[test]
fn test_placed_pieces_match_input_counts() {
    let king = sq(2, 1);
    let pieces = [
        King, Rook, Queen, Queen, Queen, Queen, Bishop, Knight, Knight, Knight, Knight,
    ];
    let solution = Solver::new().solve(king, &pieces).unwrap();

    let mut placed = solution.placement.to_piece_list();
    placed.extend(solution.dropped.iter().copied());
    for kind in PieceKind::ALL {
        assert_eq!(count(&placed, kind), count(&pieces, kind), "{} count", kind);
    }
}

#[test]
fn test_generated_problems_are_consistent() {
    // Whatever the search finds, a reported stalemate must survive the
    // leftover pass and re-validation
    let mut generator = Generator::with_seed(2024);
    generator.set_config(GeneratorConfig::small());
    let solver = Solver::with_config(
        SolverConfig::presorted().with_budget(SearchBudget::nodes(200_000)),
    );

    for _ in 0..25 {
        let problem = generator.problem();
        let solution = solver.solve(problem.king, &problem.pieces).unwrap();

        assert_eq!(
            solution.outcome == SearchOutcome::Stalemate,
            solution.is_stalemate(),
            "king {} pieces {:?}",
            problem.king,
            problem.pieces
        );
        assert!(solution.placement.is_well_formed(problem.king));
        assert_eq!(
            solution.placement.len() + solution.dropped.len(),
            problem.pieces.len()
        );
    }
}

#[test]
fn test_generated_problems_solve_presorted() {
    let solver = Solver::with_config(
        SolverConfig::presorted().with_budget(SearchBudget::nodes(1_000_000)),
    );

    for seed in 0..60 {
        let problem = Generator::with_seed(seed).problem();
        let solution = solver.solve(problem.king, &problem.pieces).unwrap();

        assert!(
            solution.is_stalemate(),
            "seed {}: king {} pieces {:?} ended with {}",
            seed,
            problem.king,
            problem.pieces,
            solution.outcome
        );
        assert!(solution.dropped.is_empty(), "seed {}", seed);
    }
}

#[test]
fn test_two_piece_sets_always_solve() {
    let solver = Solver::new();
    for row in 1..=6 {
        for col in 1..=6 {
            let king = sq(row, col);
            for set in [[King, Queen, Queen], [King, Queen, Bishop]] {
                let solution = solver.solve(king, &set).unwrap();
                assert!(
                    solution.is_stalemate(),
                    "{:?} failed for king on {}",
                    set,
                    king
                );
            }
        }
    }
}
