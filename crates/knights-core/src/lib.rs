//! Knight's tour engine.
//!
//! Two independent solvers walk the knight's move graph of an N×N board:
//! a greedy Warnsdorff walk and an exhaustive backtracking search. Both
//! mutate a single [`Board`] in place and report every placement (and every
//! undo) to a [`StepObserver`], which is where rendering, pacing and
//! cancellation live.

mod board;
mod error;
mod moves;
mod observer;
mod position;
pub mod solver;
mod tour;

pub use board::Board;
pub use error::{BoardError, PathError};
pub use moves::{candidate_moves, candidates, degree, next_candidate, CandidateMoves, KNIGHT_OFFSETS};
pub use observer::{
    CancelToken, Control, EventLog, NoopObserver, StepEvent, StepKind, StepObserver, StepRecord,
};
pub use position::Position;
pub use solver::{
    BacktrackingSolver, Outcome, Report, Solver, Strategy, StuckReason, WarnsdorffSolver,
};
pub use tour::{validate_path, validate_tour};
