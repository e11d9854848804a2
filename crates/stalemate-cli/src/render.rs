use crate::theme::Theme;
use crossterm::{
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
};
use stalemate_core::{Board, Cell, PieceKind, Placement, Solution, Square, SquareSet, BOARD_SIZE};
use std::io::{self, Write};

/// Draw the board with row and column numbers.
///
/// `open` is the part of the king's neighbourhood no piece attacks. Open
/// squares other than the king's are tinted as escapes; a king missing from
/// `open` is in check and drawn in the error color.
pub fn render_board<W: Write>(
    out: &mut W,
    board: &Board,
    open: SquareSet,
    theme: &Theme,
) -> io::Result<()> {
    queue!(out, SetForegroundColor(theme.border), Print("   "))?;
    for col in 0..BOARD_SIZE {
        queue!(out, Print(format!(" {} ", col)))?;
    }
    queue!(out, ResetColor, Print("\n"))?;

    for (square, cell) in board.cells() {
        if square.col() == 0 {
            queue!(
                out,
                SetForegroundColor(theme.border),
                Print(format!(" {} ", square.row()))
            )?;
        }

        queue!(out, SetBackgroundColor(square_bg(square, cell, open, theme)))?;
        match cell {
            Cell::Empty => queue!(out, Print("   "))?,
            Cell::King => {
                let fg = if open.contains(square) {
                    theme.defender
                } else {
                    theme.error
                };
                queue!(
                    out,
                    SetForegroundColor(fg),
                    SetAttribute(Attribute::Bold),
                    Print(" k "),
                    SetAttribute(Attribute::Reset)
                )?;
            }
            Cell::Piece(kind) => {
                queue!(
                    out,
                    SetForegroundColor(theme.attacker),
                    SetAttribute(Attribute::Bold),
                    Print(format!(" {} ", kind.symbol())),
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }

        if square.col() == BOARD_SIZE - 1 {
            queue!(out, ResetColor, Print("\n"))?;
        }
    }

    out.flush()
}

fn square_bg(square: Square, cell: Cell, open: SquareSet, theme: &Theme) -> Color {
    if cell != Cell::King && open.contains(square) {
        theme.escape_bg
    } else if (square.row() + square.col()) % 2 == 0 {
        theme.light_square
    } else {
        theme.dark_square
    }
}

/// Outcome, counters and the placed pieces, below the board
pub fn render_summary<W: Write>(out: &mut W, solution: &Solution, theme: &Theme) -> io::Result<()> {
    let stalemate = solution.is_stalemate();
    let verdict_color = if stalemate { theme.success } else { theme.error };

    queue!(
        out,
        Print("\n"),
        SetForegroundColor(theme.info),
        Print(format!("King on {}\n", solution.king)),
        Print("Search:   "),
        SetForegroundColor(verdict_color),
        Print(format!("{}\n", solution.outcome)),
        SetForegroundColor(theme.info),
        Print(format!("Nodes:    {}\n", solution.nodes_visited))
    )?;

    render_placement(out, &solution.placement, theme)?;

    if !solution.dropped.is_empty() {
        queue!(
            out,
            SetForegroundColor(theme.error),
            Print(format!("Dropped:  {}\n", format_pieces(&solution.dropped)))
        )?;
    }

    render_verdict(out, stalemate, theme)
}

fn render_placement<W: Write>(out: &mut W, placement: &Placement, theme: &Theme) -> io::Result<()> {
    queue!(out, SetForegroundColor(theme.info), Print("Placed:\n"))?;
    for kind in placement.kinds() {
        let squares: Vec<String> = placement
            .squares(kind)
            .iter()
            .map(|sq| sq.to_string())
            .collect();
        queue!(
            out,
            SetForegroundColor(theme.attacker),
            Print(format!("  {:<7}", kind.to_string())),
            SetForegroundColor(theme.info),
            Print(format!("{}\n", squares.join(" ")))
        )?;
    }
    Ok(())
}

/// Final stalemate line
pub fn render_verdict<W: Write>(out: &mut W, stalemate: bool, theme: &Theme) -> io::Result<()> {
    let (color, text) = if stalemate {
        (theme.success, "Stalemate")
    } else {
        (theme.error, "Not a stalemate")
    };
    queue!(
        out,
        SetForegroundColor(color),
        SetAttribute(Attribute::Bold),
        Print(format!("{}\n", text)),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;
    out.flush()
}

/// Piece letters separated by spaces, e.g. `Q Q N`
pub fn format_pieces(pieces: &[PieceKind]) -> String {
    pieces
        .iter()
        .map(|kind| kind.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stalemate_core::{uncovered_squares, Solver};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn render_to_string(board: &Board, open: SquareSet) -> String {
        let mut out = Vec::new();
        render_board(&mut out, board, open, &Theme::dark()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_board_marks_both_kings() {
        let king = sq(1, 1);
        let placement: Placement = [(PieceKind::King, sq(1, 3)), (PieceKind::Queen, sq(3, 0))]
            .into_iter()
            .collect();
        let board = placement.to_board(king);
        let open = uncovered_squares(&board, king, &placement);

        let text = render_to_string(&board, open);
        assert!(text.contains(" k "));
        assert!(text.contains(" K "));
        assert!(text.contains(" Q "));
        assert_eq!(text.matches('\n').count(), BOARD_SIZE + 1);
    }

    #[test]
    fn test_summary_reports_outcome() {
        let solution = Solver::new()
            .solve(sq(1, 1), &[PieceKind::King, PieceKind::Queen, PieceKind::Queen])
            .unwrap();
        let mut out = Vec::new();
        render_summary(&mut out, &solution, &Theme::light()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("King on (1, 1)"));
        assert!(text.contains("stalemate"));
        assert!(text.contains("Queen"));
        assert!(!text.contains("Dropped"));
    }

    #[test]
    fn test_format_pieces() {
        assert_eq!(
            format_pieces(&[PieceKind::Queen, PieceKind::Knight, PieceKind::Knight]),
            "Q N N"
        );
        assert_eq!(format_pieces(&[]), "");
    }
}
