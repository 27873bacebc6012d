use crate::Position;
use thiserror::Error;

/// Precondition failures, raised before any search starts.
///
/// Search results (stuck, no solution, cancelled) are never errors; see
/// [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size {0} is out of range")]
    InvalidSize(usize),
    #[error("origin {origin} is outside the {size}x{size} board")]
    OriginOutOfBounds { origin: Position, size: usize },
    #[error("board already holds {move_count} placed squares")]
    BoardInUse { move_count: usize },
}

/// Reasons a sequence of squares is not a legal knight's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("{position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },
    #[error("{0} is visited more than once")]
    Revisited(Position),
    #[error("{from} -> {to} is not a knight move")]
    NotAKnightMove { from: Position, to: Position },
    #[error("path covers {len} squares, a tour needs {expected}")]
    Incomplete { len: usize, expected: usize },
}
