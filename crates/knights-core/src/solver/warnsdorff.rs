//! Warnsdorff's rule: always jump to the reachable square with the fewest
//! onward moves. One pass, no undo.

use super::{prepare, Stepper};
use crate::{
    candidates, degree, Board, BoardError, CancelToken, Control, Outcome, Position, StepKind,
    StepObserver, StuckReason,
};

/// Greedy minimum-degree walk.
///
/// Gets stuck on some boards and origins even when a tour exists; the caller
/// decides whether to fall back to [`BacktrackingSolver`](super::BacktrackingSolver).
#[derive(Debug, Clone, Default)]
pub struct WarnsdorffSolver {
    cancel: Option<CancelToken>,
}

impl WarnsdorffSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll `token` at every step boundary
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Walk from `origin` on an empty `board`.
    pub fn run<O>(&self, board: &mut Board, origin: Position, observer: &mut O) -> Result<Outcome, BoardError>
    where
        O: StepObserver + ?Sized,
    {
        prepare(board, origin)?;
        let mut steps = Stepper::new(observer, self.cancel.as_ref());
        log::debug!("warnsdorff: {}x{} from {}", board.size(), board.size(), origin);

        board.place(origin, 0);
        let mut path = vec![origin];
        if steps.emit(StepKind::Placed, origin, 0, board) == Control::Cancel {
            return Ok(Outcome::Cancelled);
        }

        let mut current = origin;
        while path.len() < board.square_count() {
            let Some(next) = select_next(current, board) else {
                let reason = StuckReason {
                    at: current,
                    moves_made: path.len() - 1,
                };
                log::debug!("warnsdorff: {}", reason);
                return Ok(Outcome::Stuck { path, reason });
            };

            let move_index = path.len();
            board.place(next, move_index);
            path.push(next);
            current = next;
            if steps.emit(StepKind::Placed, next, move_index, board) == Control::Cancel {
                log::debug!("warnsdorff: cancelled at move {}", move_index);
                return Ok(Outcome::Cancelled);
            }
        }

        log::debug!("warnsdorff: tour complete");
        Ok(Outcome::Completed { path })
    }
}

/// Candidate from `from` with the lowest accessibility degree.
///
/// `min_by_key` keeps the first of equal minima, so ties fall to
/// [`KNIGHT_OFFSETS`](crate::KNIGHT_OFFSETS) order.
pub fn select_next(from: Position, board: &Board) -> Option<Position> {
    candidates(from, board).min_by_key(|&candidate| degree(candidate, board))
}
