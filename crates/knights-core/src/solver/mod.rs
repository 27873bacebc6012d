//! Solver orchestrator.
//!
//! Dispatches to the Warnsdorff walk or the backtracking search and wraps
//! the result in a [`Report`].

mod backtrack;
mod types;
mod warnsdorff;

use crate::{Board, BoardError, CancelToken, Control, Position, StepEvent, StepKind, StepObserver};
use std::time::Instant;

pub use backtrack::BacktrackingSolver;
pub use types::{Outcome, Report, Strategy, StuckReason};
pub use warnsdorff::{select_next, WarnsdorffSolver};

/// Reject origins off the board and boards that already hold moves.
fn prepare(board: &Board, origin: Position) -> Result<(), BoardError> {
    if !board.contains(origin) {
        return Err(BoardError::OriginOutOfBounds {
            origin,
            size: board.size(),
        });
    }
    if board.move_count() > 0 {
        return Err(BoardError::BoardInUse {
            move_count: board.move_count(),
        });
    }
    Ok(())
}

/// Delivers step events to the observer and folds in the cancel token.
struct Stepper<'a, O: ?Sized> {
    observer: &'a mut O,
    cancel: Option<&'a CancelToken>,
}

impl<'a, O: StepObserver + ?Sized> Stepper<'a, O> {
    fn new(observer: &'a mut O, cancel: Option<&'a CancelToken>) -> Self {
        Self { observer, cancel }
    }

    fn emit(&mut self, kind: StepKind, position: Position, move_index: usize, board: &Board) -> Control {
        log::trace!("{:?} {} as move {}", kind, position, move_index);
        let event = StepEvent {
            kind,
            position,
            move_index,
            board,
        };
        let control = self.observer.on_step(&event);
        if control == Control::Cancel || self.cancel.is_some_and(CancelToken::is_cancelled) {
            Control::Cancel
        } else {
            Control::Continue
        }
    }
}

/// Counts events on their way to the caller's observer.
struct Tally<'a, O: ?Sized> {
    inner: &'a mut O,
    placed: usize,
    reverted: usize,
}

impl<O: StepObserver + ?Sized> StepObserver for Tally<'_, O> {
    fn on_step(&mut self, event: &StepEvent<'_>) -> Control {
        match event.kind {
            StepKind::Placed => self.placed += 1,
            StepKind::Reverted => self.reverted += 1,
        }
        self.inner.on_step(event)
    }
}

/// Configured solver run: strategy, origin and optional cancellation.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    strategy: Strategy,
    origin: Position,
    cancel: Option<CancelToken>,
}

impl Solver {
    /// Create a solver starting from the top-left corner.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            origin: Position::new(0, 0),
            cancel: None,
        }
    }

    pub fn with_origin(mut self, origin: Position) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Run on a fresh `size`×`size` board.
    ///
    /// With [`Strategy::Auto`], a stuck Warnsdorff walk is followed by a
    /// backtracking search on a new board; the observer sees both runs.
    pub fn solve<O>(&self, size: usize, observer: &mut O) -> Result<Report, BoardError>
    where
        O: StepObserver + ?Sized,
    {
        let started = Instant::now();
        let mut tally = Tally {
            inner: observer,
            placed: 0,
            reverted: 0,
        };

        let (solved_by, board, outcome) = match self.strategy {
            Strategy::Warnsdorff => self.run_warnsdorff(size, &mut tally)?,
            Strategy::Backtracking => self.run_backtracking(size, &mut tally)?,
            Strategy::Auto => {
                let first = self.run_warnsdorff(size, &mut tally)?;
                let stuck = match &first.2 {
                    Outcome::Stuck { reason, .. } => Some(*reason),
                    _ => None,
                };
                match stuck {
                    Some(reason) => {
                        log::info!("warnsdorff {}; falling back to backtracking", reason);
                        self.run_backtracking(size, &mut tally)?
                    }
                    None => first,
                }
            }
        };

        log::debug!(
            "{} run on {}x{} from {}: {}",
            solved_by,
            size,
            size,
            self.origin,
            outcome.label()
        );

        Ok(Report {
            requested: self.strategy,
            solved_by,
            origin: self.origin,
            outcome,
            board,
            placed: tally.placed,
            reverted: tally.reverted,
            elapsed: started.elapsed(),
        })
    }

    fn run_warnsdorff<O>(&self, size: usize, observer: &mut O) -> Result<(Strategy, Board, Outcome), BoardError>
    where
        O: StepObserver + ?Sized,
    {
        let mut board = Board::new(size)?;
        let mut solver = WarnsdorffSolver::new();
        if let Some(token) = &self.cancel {
            solver = solver.with_cancel(token.clone());
        }
        let outcome = solver.run(&mut board, self.origin, observer)?;
        Ok((Strategy::Warnsdorff, board, outcome))
    }

    fn run_backtracking<O>(&self, size: usize, observer: &mut O) -> Result<(Strategy, Board, Outcome), BoardError>
    where
        O: StepObserver + ?Sized,
    {
        let mut board = Board::new(size)?;
        let mut solver = BacktrackingSolver::new();
        if let Some(token) = &self.cancel {
            solver = solver.with_cancel(token.clone());
        }
        let outcome = solver.run(&mut board, self.origin, observer)?;
        Ok((Strategy::Backtracking, board, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_tour, EventLog, NoopObserver};

    #[test]
    fn test_warnsdorff_report() {
        let report = Solver::new(Strategy::Warnsdorff)
            .solve(8, &mut NoopObserver)
            .unwrap();
        assert_eq!(report.solved_by, Strategy::Warnsdorff);
        assert!(report.outcome.is_completed());
        assert_eq!(report.placed, 64);
        assert_eq!(report.reverted, 0);
        assert!(!report.fell_back());
        assert!(report.board.is_complete());
    }

    #[test]
    fn test_backtracking_report_counts_reverts() {
        let report = Solver::new(Strategy::Backtracking)
            .solve(5, &mut NoopObserver)
            .unwrap();
        assert!(report.outcome.is_completed());
        // every revert undoes a placement, and 25 placements survive
        assert_eq!(report.placed - report.reverted, 25);
        assert!(report.reverted > 0);
    }

    #[test]
    fn test_auto_falls_back_when_stuck() {
        let mut log = EventLog::new();
        let report = Solver::new(Strategy::Auto)
            .with_origin(Position::new(0, 0))
            .solve(4, &mut log)
            .unwrap();
        assert!(report.fell_back());
        assert_eq!(report.outcome, Outcome::NoSolution);
        assert_eq!(report.placed, log.count(StepKind::Placed));
        // the greedy run placed squares that were never reverted
        assert!(log.count(StepKind::Placed) > log.count(StepKind::Reverted));
    }

    #[test]
    fn test_auto_keeps_completed_walk() {
        let report = Solver::new(Strategy::Auto).solve(6, &mut NoopObserver).unwrap();
        assert_eq!(report.solved_by, Strategy::Warnsdorff);
        let path = report.outcome.path().unwrap();
        assert_eq!(validate_tour(6, path), Ok(()));
    }

    #[test]
    fn test_auto_fallback_finds_tour() {
        let origin = Position::new(0, 2);
        let report = Solver::new(Strategy::Auto)
            .with_origin(origin)
            .solve(5, &mut NoopObserver)
            .unwrap();
        assert!(report.fell_back());
        let path = report.outcome.path().unwrap();
        assert_eq!(path[0], origin);
        assert_eq!(validate_tour(5, path), Ok(()));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            Solver::new(Strategy::Backtracking).solve(0, &mut NoopObserver).unwrap_err(),
            BoardError::InvalidSize(0)
        );
        assert_eq!(
            Solver::new(Strategy::Warnsdorff)
                .with_origin(Position::new(3, 9))
                .solve(8, &mut NoopObserver)
                .unwrap_err(),
            BoardError::OriginOutOfBounds {
                origin: Position::new(3, 9),
                size: 8
            }
        );
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let report = Solver::new(Strategy::Auto)
            .with_cancel(token)
            .solve(8, &mut NoopObserver)
            .unwrap();
        assert_eq!(report.outcome, Outcome::Cancelled);
        assert_eq!(report.placed, 1);
    }

    #[test]
    fn test_report_serializes() {
        let report = Solver::new(Strategy::Warnsdorff).solve(5, &mut NoopObserver).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["requested"], "warnsdorff");
        assert_eq!(json["outcome"]["status"], "completed");
        assert_eq!(json["outcome"]["path"].as_array().unwrap().len(), 25);
        assert_eq!(json["board"]["size"], 5);
    }
}
