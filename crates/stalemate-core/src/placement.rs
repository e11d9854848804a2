use crate::{Board, Cell, PieceKind, Square, SquareSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where each attacking piece stands, grouped by kind.
///
/// Squares under one kind keep insertion order so the last placed piece can
/// be taken back during backtracking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Placement {
    pieces: BTreeMap<PieceKind, Vec<Square>>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: PieceKind, square: Square) {
        self.pieces.entry(kind).or_default().push(square);
    }

    /// Take back the most recently placed piece of `kind`
    pub fn pop(&mut self, kind: PieceKind) -> Option<Square> {
        let squares = self.pieces.get_mut(&kind)?;
        let square = squares.pop();
        if squares.is_empty() {
            self.pieces.remove(&kind);
        }
        square
    }

    pub fn squares(&self, kind: PieceKind) -> &[Square] {
        self.pieces.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of pieces of `kind`
    pub fn count(&self, kind: PieceKind) -> usize {
        self.squares(kind).len()
    }

    /// Total number of pieces
    pub fn len(&self) -> usize {
        self.pieces.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Every `(kind, square)` pair, ordered by kind then insertion
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, Square)> + '_ {
        self.pieces
            .iter()
            .flat_map(|(&kind, squares)| squares.iter().map(move |&sq| (kind, sq)))
    }

    pub fn kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pieces.keys().copied()
    }

    /// Set of occupied squares
    pub fn occupied(&self) -> SquareSet {
        self.iter().map(|(_, sq)| sq).collect()
    }

    /// Pieces as a flat list, one entry per piece
    pub fn to_piece_list(&self) -> Vec<PieceKind> {
        self.iter().map(|(kind, _)| kind).collect()
    }

    /// True if no two pieces share a square and none stands on `king`
    pub fn is_well_formed(&self, king: Square) -> bool {
        let occupied = self.occupied();
        occupied.len() == self.len() && !occupied.contains(king)
    }

    /// Board holding the defending king and every placed piece
    pub fn to_board(&self, king: Square) -> Board {
        let mut board = Board::with_king(king);
        for (kind, square) in self.iter() {
            board.set(square, Cell::Piece(kind));
        }
        board
    }
}

impl FromIterator<(PieceKind, Square)> for Placement {
    fn from_iter<I: IntoIterator<Item = (PieceKind, Square)>>(iter: I) -> Self {
        let mut placement = Placement::new();
        for (kind, square) in iter {
            placement.push(kind, square);
        }
        placement
    }
}
