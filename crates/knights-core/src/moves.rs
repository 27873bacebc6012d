//! Knight move generation.
//!
//! Both solvers enumerate moves in [`KNIGHT_OFFSETS`] order. Warnsdorff
//! breaks degree ties by it and the backtracking search explores branches in
//! it, so runs are reproducible.

use crate::{Board, Position};

/// The eight knight deltas `(dx, dy)` in enumeration order.
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// First legal target from `from` at or after offset index `start`.
///
/// Returns the offset index alongside the target so a search can resume
/// enumeration where it left off.
pub fn next_candidate(from: Position, board: &Board, start: usize) -> Option<(usize, Position)> {
    KNIGHT_OFFSETS
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(i, &(dx, dy))| {
            from.offset(dx, dy, board.size())
                .filter(|&target| !board.is_visited(target))
                .map(|target| (i, target))
        })
}

/// Iterator over unvisited squares one knight move from a square.
#[derive(Debug, Clone)]
pub struct CandidateMoves<'a> {
    board: &'a Board,
    from: Position,
    next: usize,
}

impl Iterator for CandidateMoves<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let (i, target) = next_candidate(self.from, self.board, self.next)?;
        self.next = i + 1;
        Some(target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(KNIGHT_OFFSETS.len().saturating_sub(self.next)))
    }
}

/// Lazily enumerate candidate moves in offset order.
pub fn candidates(from: Position, board: &Board) -> CandidateMoves<'_> {
    CandidateMoves {
        board,
        from,
        next: 0,
    }
}

/// Candidate moves from `from`: on the board and not yet visited.
pub fn candidate_moves(from: Position, board: &Board) -> Vec<Position> {
    candidates(from, board).collect()
}

/// Accessibility degree: how many candidate moves a square would offer.
pub fn degree(pos: Position, board: &Board) -> usize {
    candidates(pos, board).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_has_two_moves() {
        for size in 3..=10 {
            let board = Board::new(size).unwrap();
            let moves = candidate_moves(Position::new(0, 0), &board);
            assert_eq!(moves, vec![Position::new(2, 1), Position::new(1, 2)]);
        }
    }

    #[test]
    fn test_center_has_eight_moves_in_offset_order() {
        let board = Board::new(8).unwrap();
        let from = Position::new(3, 3);
        let moves = candidate_moves(from, &board);
        let expected: Vec<Position> = KNIGHT_OFFSETS
            .iter()
            .map(|&(dx, dy)| from.offset(dx, dy, 8).unwrap())
            .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_visited_squares_are_filtered() {
        let mut board = Board::new(8).unwrap();
        board.place(Position::new(0, 0), 0);
        board.place(Position::new(2, 1), 1);
        assert_eq!(candidate_moves(Position::new(0, 0), &board), vec![Position::new(1, 2)]);
        assert_eq!(degree(Position::new(0, 0), &board), 1);
    }

    #[test]
    fn test_tiny_boards_have_no_moves() {
        let board = Board::new(1).unwrap();
        assert!(candidate_moves(Position::new(0, 0), &board).is_empty());
        let board = Board::new(2).unwrap();
        assert!(board.positions().all(|pos| degree(pos, &board) == 0));
        // the middle of a 3x3 board is unreachable
        let board = Board::new(3).unwrap();
        assert_eq!(degree(Position::new(1, 1), &board), 0);
    }

    #[test]
    fn test_next_candidate_resumes() {
        let board = Board::new(8).unwrap();
        let from = Position::new(0, 0);
        assert_eq!(next_candidate(from, &board, 0), Some((0, Position::new(2, 1))));
        assert_eq!(next_candidate(from, &board, 1), Some((1, Position::new(1, 2))));
        assert_eq!(next_candidate(from, &board, 2), None);
        assert_eq!(next_candidate(from, &board, 8), None);
    }
}
