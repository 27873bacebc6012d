use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Which solver to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Greedy minimum-degree walk; fast, may get stuck
    #[default]
    Warnsdorff,
    /// Exhaustive depth-first search with undo
    Backtracking,
    /// Warnsdorff first, backtracking on a fresh board if it gets stuck
    Auto,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Warnsdorff => write!(f, "Warnsdorff"),
            Strategy::Backtracking => write!(f, "Backtracking"),
            Strategy::Auto => write!(f, "Auto"),
        }
    }
}

/// Where and when the greedy walk ran out of moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StuckReason {
    /// Square the knight was standing on
    pub at: Position,
    /// Moves made before getting stuck (squares visited minus one)
    pub moves_made: usize,
}

impl fmt::Display for StuckReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no unvisited square reachable from {} after {} moves", self.at, self.moves_made)
    }
}

/// Terminal result of a solver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Every square visited; `path` has N² entries
    Completed { path: Vec<Position> },
    /// The greedy walk hit a dead end
    Stuck { path: Vec<Position>, reason: StuckReason },
    /// Exhaustive search found no tour from the origin
    NoSolution,
    /// The observer or cancel token stopped the run
    Cancelled,
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }

    /// Squares visited, for outcomes that carry a path
    pub fn path(&self) -> Option<&[Position]> {
        match self {
            Outcome::Completed { path } | Outcome::Stuck { path, .. } => Some(path),
            Outcome::NoSolution | Outcome::Cancelled => None,
        }
    }

    /// Short lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Completed { .. } => "completed",
            Outcome::Stuck { .. } => "stuck",
            Outcome::NoSolution => "no solution",
            Outcome::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Completed { path } => write!(f, "tour complete in {} moves", path.len() - 1),
            Outcome::Stuck { reason, .. } => write!(f, "stuck: {}", reason),
            Outcome::NoSolution => write!(f, "no knight's tour exists from this origin"),
            Outcome::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Summary of a [`Solver`](super::Solver) run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Strategy that was asked for
    pub requested: Strategy,
    /// Strategy that produced `outcome`
    pub solved_by: Strategy,
    pub origin: Position,
    pub outcome: Outcome,
    /// Board as the final solver left it
    pub board: Board,
    /// Placement events across all solver runs
    pub placed: usize,
    /// Revert events across all solver runs
    pub reverted: usize,
    pub elapsed: Duration,
}

impl Report {
    /// Whether `Auto` had to fall back to backtracking
    pub fn fell_back(&self) -> bool {
        self.requested == Strategy::Auto && self.solved_by == Strategy::Backtracking
    }
}
