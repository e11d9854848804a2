use crate::{Result, StalemateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of the board
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the board, always in bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a square
#[derive(Deserialize)]
struct RawSquare {
    row: i32,
    col: i32,
}

impl TryFrom<RawSquare> for Square {
    type Error = StalemateError;

    fn try_from(raw: RawSquare) -> Result<Self> {
        Square::new(raw.row, raw.col)
    }
}

impl Square {
    /// Create a square, rejecting coordinates off the board
    pub fn new(row: i32, col: i32) -> Result<Self> {
        if Board::in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(StalemateError::OutOfBounds { row, col })
        }
    }

    /// Square from coordinates the caller knows are on the board
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    /// Square for a linear index (`row * 8 + col`)
    pub fn from_index(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Some(Self {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Linear index in row-major order
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// The square `(dr, dc)` away, if it is still on the board
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Square::new(self.row as i32 + dr, self.col as i32 + dc).ok()
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = StalemateError;

    /// Parses `"r,c"`, `"r c"` or `"(r, c)"`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty());

        let (row, col) = match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => (row, col),
            _ => return Err(StalemateError::InvalidSquare(s.to_string())),
        };
        let row: i32 = row
            .parse()
            .map_err(|_| StalemateError::InvalidSquare(s.to_string()))?;
        let col: i32 = col
            .parse()
            .map_err(|_| StalemateError::InvalidSquare(s.to_string()))?;
        Square::new(row, col)
    }
}

/// Kind of attacking piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Parse a piece letter. `H` (horse) is accepted for the knight.
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'K' => Ok(PieceKind::King),
            'Q' => Ok(PieceKind::Queen),
            'R' => Ok(PieceKind::Rook),
            'B' => Ok(PieceKind::Bishop),
            'N' | 'H' => Ok(PieceKind::Knight),
            _ => Err(StalemateError::InvalidPieceKind(c)),
        }
    }

    /// Parse a list of piece letters such as `"KQQ"` or `"K, Q, B"`
    pub fn parse_list(s: &str) -> Result<Vec<PieceKind>> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(PieceKind::from_char)
            .collect()
    }

    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::King => write!(f, "King"),
            PieceKind::Queen => write!(f, "Queen"),
            PieceKind::Rook => write!(f, "Rook"),
            PieceKind::Bishop => write!(f, "Bishop"),
            PieceKind::Knight => write!(f, "Knight"),
        }
    }
}

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// The defending king
    King,
    /// An attacking piece
    Piece(PieceKind),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// An 8x8 board of cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board holding only the defending king
    pub fn with_king(king: Square) -> Self {
        let mut board = Self::new();
        board.set(king, Cell::King);
        board
    }

    /// Check raw coordinates against the board edges
    pub fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row()][square.col()] = cell;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_empty()
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Row-major iteration over every cell, for renderers
    pub fn cells(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all().map(move |sq| (sq, self.get(sq)))
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|&(_, cell)| !cell.is_empty()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = self.cells[row][col];
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::King => 'k',
                    Cell::Piece(kind) => kind.symbol(),
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(StalemateError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            Square::new(3, -1),
            Err(StalemateError::OutOfBounds { row: 3, col: -1 })
        );
    }

    #[test]
    fn test_square_index_roundtrip() {
        for square in Square::all() {
            assert_eq!(Square::from_index(square.index()), Some(square));
        }
        assert_eq!(Square::from_index(64), None);
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_square_offset_clips() {
        assert_eq!(sq(0, 0).offset(-1, 0), None);
        assert_eq!(sq(0, 0).offset(1, 2), Some(sq(1, 2)));
        assert_eq!(sq(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("1,1".parse::<Square>(), Ok(sq(1, 1)));
        assert_eq!("(2, 3)".parse::<Square>(), Ok(sq(2, 3)));
        assert_eq!("4 5".parse::<Square>(), Ok(sq(4, 5)));
        assert_eq!(
            "9,1".parse::<Square>(),
            Err(StalemateError::OutOfBounds { row: 9, col: 1 })
        );
        assert!(matches!(
            "a,b".parse::<Square>(),
            Err(StalemateError::InvalidSquare(_))
        ));
        assert!(matches!(
            "1,2,3".parse::<Square>(),
            Err(StalemateError::InvalidSquare(_))
        ));
    }

    #[test]
    fn test_square_serde_rejects_out_of_bounds() {
        let ok: Square = serde_json::from_str(r#"{"row":3,"col":0}"#).unwrap();
        assert_eq!(ok, sq(3, 0));
        assert!(serde_json::from_str::<Square>(r#"{"row":3,"col":8}"#).is_err());
    }

    #[test]
    fn test_piece_kind_parsing() {
        assert_eq!(PieceKind::from_char('q'), Ok(PieceKind::Queen));
        assert_eq!(PieceKind::from_char('H'), Ok(PieceKind::Knight));
        assert_eq!(PieceKind::from_char('N'), Ok(PieceKind::Knight));
        assert_eq!(
            PieceKind::from_char('X'),
            Err(StalemateError::InvalidPieceKind('X'))
        );
        assert_eq!(
            PieceKind::parse_list("K, Q, B").unwrap(),
            vec![PieceKind::King, PieceKind::Queen, PieceKind::Bishop]
        );
        assert_eq!(
            PieceKind::parse_list("KQZ"),
            Err(StalemateError::InvalidPieceKind('Z'))
        );
    }

    #[test]
    fn test_board_set_get() {
        let mut board = Board::new();
        assert!(board.is_empty(sq(2, 2)));
        board.set(sq(2, 2), Cell::Piece(PieceKind::Rook));
        assert_eq!(board.get(sq(2, 2)), Cell::Piece(PieceKind::Rook));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_board_in_bounds() {
        assert!(Board::in_bounds(0, 7));
        assert!(!Board::in_bounds(-1, 0));
        assert!(!Board::in_bounds(0, 8));
    }

    #[test]
    fn test_board_clear_is_idempotent() {
        let mut board = Board::with_king(sq(1, 1));
        board.set(sq(5, 5), Cell::Piece(PieceKind::Queen));

        board.clear();
        let once = board.clone();
        board.clear();

        assert_eq!(board, once);
        assert_eq!(board, Board::new());
        assert!(board.cells().all(|(_, cell)| cell.is_empty()));
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::with_king(sq(0, 0));
        board.set(sq(0, 2), Cell::Piece(PieceKind::Queen));
        let text = board.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "k . Q . . . . .");
        assert_eq!(text.lines().count(), 8);
    }
}
