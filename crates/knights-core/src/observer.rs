//! Step events delivered from a solver to whoever is watching it.

use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Whether a square was just labelled or just unlabelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Placed,
    Reverted,
}

/// One placement or revert, with a view of the board right after it.
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a> {
    pub kind: StepKind,
    pub position: Position,
    /// Label the square received (or held, for a revert)
    pub move_index: usize,
    pub board: &'a Board,
}

impl StepEvent<'_> {
    /// Owned copy of the event without the board view
    pub fn record(&self) -> StepRecord {
        StepRecord {
            kind: self.kind,
            position: self.position,
            move_index: self.move_index,
        }
    }
}

/// A [`StepEvent`] detached from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub kind: StepKind,
    pub position: Position,
    pub move_index: usize,
}

/// What the observer wants the solver to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Continue,
    Cancel,
}

/// Receives every placement and revert a solver makes.
///
/// Returning [`Control::Cancel`] stops the run at the next step boundary.
pub trait StepObserver {
    fn on_step(&mut self, event: &StepEvent<'_>) -> Control;
}

impl<F> StepObserver for F
where
    F: FnMut(&StepEvent<'_>) -> Control,
{
    fn on_step(&mut self, event: &StepEvent<'_>) -> Control {
        self(event)
    }
}

/// Observer for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _event: &StepEvent<'_>) -> Control {
        Control::Continue
    }
}

/// Records every event it sees.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Vec<StepRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn count(&self, kind: StepKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Events that touched a given square, in order
    pub fn for_position(&self, pos: Position) -> impl Iterator<Item = &StepRecord> + '_ {
        self.records.iter().filter(move |r| r.position == pos)
    }
}

impl StepObserver for EventLog {
    fn on_step(&mut self, event: &StepEvent<'_>) -> Control {
        self.records.push(event.record());
        Control::Continue
    }
}

/// Shared cancellation flag, checked by the solvers between steps.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the run stop at the next step boundary
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
