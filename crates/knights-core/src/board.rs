use crate::{BoardError, Position};
use serde::Serialize;
use std::fmt;
use std::mem;

/// Most cells a single allocation can hold
const MAX_SQUARES: usize = isize::MAX as usize / mem::size_of::<Option<usize>>();

/// N×N grid of move-order labels.
///
/// A cell holds `None` until the knight lands on it, then the 0-based index
/// of that visit. Visited state is derived from the label, so the two can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<usize>>,
    move_count: usize,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// Zero and sizes whose square count cannot be addressed are rejected.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let squares = size
            .checked_mul(size)
            .filter(|&n| n > 0 && n <= MAX_SQUARES)
            .ok_or(BoardError::InvalidSize(size))?;
        Ok(Self {
            size,
            cells: vec![None; squares],
            move_count: 0,
        })
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares on the board (N²)
    pub fn square_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of labelled squares
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Whether every square carries a label
    pub fn is_complete(&self) -> bool {
        self.move_count == self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.size)
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "{} is off a {}x{} board", pos, self.size, self.size);
        pos.x * self.size + pos.y
    }

    /// Label of a square, `None` while unvisited.
    ///
    /// Panics if `pos` is off the board.
    pub fn get(&self, pos: Position) -> Option<usize> {
        self.cells[self.index(pos)]
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Label a square and mark it visited.
    pub fn place(&mut self, pos: Position, label: usize) {
        let idx = self.index(pos);
        debug_assert!(self.cells[idx].is_none(), "{} placed twice", pos);
        self.cells[idx] = Some(label);
        self.move_count += 1;
    }

    /// Restore a square to unvisited, returning the label it held.
    pub fn clear(&mut self, pos: Position) -> Option<usize> {
        let idx = self.index(pos);
        let label = self.cells[idx].take();
        if label.is_some() {
            self.move_count -= 1;
        }
        label
    }

    /// All squares in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |x| (0..self.size).map(move |y| Position::new(x, y)))
    }

    /// Rows of labels, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Visited squares ordered by label
    pub fn path(&self) -> Vec<Position> {
        let mut labelled: Vec<(usize, Position)> = self
            .positions()
            .filter_map(|pos| self.get(pos).map(|label| (label, pos)))
            .collect();
        labelled.sort_unstable();
        labelled.into_iter().map(|(_, pos)| pos).collect()
    }

    /// Whether the labels present are exactly `0..move_count`, each once.
    pub fn labels_are_consistent(&self) -> bool {
        let mut seen = vec![false; self.move_count];
        for label in self.cells.iter().flatten() {
            match seen.get_mut(*label) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Column width used by the text grid: digits of the largest label, at least 2.
    pub fn label_width(&self) -> usize {
        let max_label = self.square_count() - 1;
        max_label.to_string().len().max(2)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.label_width();
        for row in self.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(label) => write!(f, "{:0width$}", label, width = width)?,
                    None => write!(f, "{}", ".".repeat(width))?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.square_count(), 25);
        assert_eq!(board.move_count(), 0);
        assert!(board.positions().all(|pos| !board.is_visited(pos)));
        assert!(board.labels_are_consistent());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize(0)));
    }

    #[test]
    fn test_oversized_board_rejected() {
        // side length whose square count overflows usize
        let side = 1usize << (usize::BITS / 2);
        assert_eq!(Board::new(side), Err(BoardError::InvalidSize(side)));
        assert_eq!(Board::new(usize::MAX), Err(BoardError::InvalidSize(usize::MAX)));
        // fits in usize but not in one allocation
        let side = 1usize << (usize::BITS / 2 - 1);
        assert_eq!(Board::new(side), Err(BoardError::InvalidSize(side)));
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new(4).unwrap();
        let a = Position::new(0, 0);
        let b = Position::new(1, 2);

        board.place(a, 0);
        board.place(b, 1);
        assert_eq!(board.get(b), Some(1));
        assert_eq!(board.move_count(), 2);
        assert_eq!(board.path(), vec![a, b]);

        assert_eq!(board.clear(b), Some(1));
        assert_eq!(board.clear(b), None);
        assert!(!board.is_visited(b));
        assert_eq!(board.move_count(), 1);
        assert!(board.labels_are_consistent());
    }

    #[test]
    fn test_inconsistent_labels_detected() {
        let mut board = Board::new(3).unwrap();
        board.place(Position::new(0, 0), 0);
        board.place(Position::new(1, 2), 2);
        assert!(!board.labels_are_consistent());
    }

    #[test]
    fn test_label_width() {
        assert_eq!(Board::new(1).unwrap().label_width(), 2);
        assert_eq!(Board::new(10).unwrap().label_width(), 2);
        assert_eq!(Board::new(11).unwrap().label_width(), 3);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new(3).unwrap();
        board.place(Position::new(0, 0), 0);
        board.place(Position::new(2, 1), 1);
        assert_eq!(board.to_string(), "00 .. ..\n.. .. ..\n.. 01 ..\n");
    }

    #[test]
    fn test_serializes_cells() {
        let mut board = Board::new(2).unwrap();
        board.place(Position::new(1, 1), 0);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["size"], 2);
        assert_eq!(json["move_count"], 1);
        assert_eq!(json["cells"], serde_json::json!([null, null, null, 0]));
    }
}
