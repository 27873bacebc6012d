use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the board. `x` is the row, `y` the column, both 0-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the square lies on a `size`×`size` board
    pub fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Apply a delta, returning `None` if the target falls off the board.
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Position> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let target = Position::new(x, y);
        target.in_bounds(size).then_some(target)
    }

    /// Whether `other` is exactly one knight move away
    pub fn is_knight_move_to(self, other: Position) -> bool {
        matches!(
            (self.x.abs_diff(other.x), self.y.abs_diff(other.y)),
            (1, 2) | (2, 1)
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
