use thiserror::Error;

/// Errors raised by the placement engine.
///
/// Failing to find a stalemate is not an error: see [`crate::SearchOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StalemateError {
    #[error("invalid piece letter '{0}' (expected one of K, Q, R, B, N)")]
    InvalidPieceKind(char),
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("piece list must contain exactly one king, found {0}")]
    KingCount(usize),
    #[error("cannot parse square from {0:?}")]
    InvalidSquare(String),
}

pub type Result<T> = std::result::Result<T, StalemateError>;
