//! Exhaustive depth-first search for a knight's tour.
//!
//! The search keeps its own stack of frames instead of recursing, so depth
//! is bounded by N² frames on the heap rather than the call stack. Each
//! frame remembers which offset to try next; popping a frame is the undo.

use super::{prepare, Stepper};
use crate::{
    next_candidate, Board, BoardError, CancelToken, Control, Outcome, Position, StepKind,
    StepObserver,
};

#[derive(Debug, Clone, Copy)]
struct Frame {
    position: Position,
    /// Next index into `KNIGHT_OFFSETS` to try from `position`
    next_offset: usize,
}

impl Frame {
    fn new(position: Position) -> Self {
        Self {
            position,
            next_offset: 0,
        }
    }
}

/// Backtracking search over candidates in fixed offset order, no ordering
/// heuristic and no memoization. Exponential in the worst case.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingSolver {
    cancel: Option<CancelToken>,
}

impl BacktrackingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll `token` at every step boundary
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Search for a tour starting at `origin` on an empty `board`.
    ///
    /// On [`Outcome::NoSolution`] every square except the origin has been
    /// reverted. On [`Outcome::Cancelled`] the board is left mid-search.
    pub fn run<O>(&self, board: &mut Board, origin: Position, observer: &mut O) -> Result<Outcome, BoardError>
    where
        O: StepObserver + ?Sized,
    {
        prepare(board, origin)?;
        let mut steps = Stepper::new(observer, self.cancel.as_ref());
        log::debug!("backtracking: {}x{} from {}", board.size(), board.size(), origin);

        board.place(origin, 0);
        if steps.emit(StepKind::Placed, origin, 0, board) == Control::Cancel {
            return Ok(Outcome::Cancelled);
        }

        let mut stack = Vec::with_capacity(board.square_count());
        stack.push(Frame::new(origin));
        let mut explored: u64 = 0;

        loop {
            if board.is_complete() {
                log::debug!("backtracking: tour complete after {} steps", explored);
                let path = stack.iter().map(|frame| frame.position).collect();
                return Ok(Outcome::Completed { path });
            }

            let Some(top) = stack.last_mut() else {
                unreachable!("origin frame is never popped while searching");
            };

            match next_candidate(top.position, board, top.next_offset) {
                Some((offset, target)) => {
                    top.next_offset = offset + 1;
                    let move_index = board.move_count();
                    board.place(target, move_index);
                    stack.push(Frame::new(target));
                    explored += 1;
                    if steps.emit(StepKind::Placed, target, move_index, board) == Control::Cancel {
                        log::debug!("backtracking: cancelled after {} steps", explored);
                        return Ok(Outcome::Cancelled);
                    }
                }
                None => {
                    // every branch from `top` failed
                    let position = top.position;
                    if stack.len() == 1 {
                        log::debug!("backtracking: search exhausted after {} steps", explored);
                        return Ok(Outcome::NoSolution);
                    }
                    stack.pop();
                    let move_index = board
                        .clear(position)
                        .expect("every frame on the stack holds a placed square");
                    explored += 1;
                    if steps.emit(StepKind::Reverted, position, move_index, board) == Control::Cancel {
                        log::debug!("backtracking: cancelled after {} steps", explored);
                        return Ok(Outcome::Cancelled);
                    }
                }
            }
        }
    }
}
