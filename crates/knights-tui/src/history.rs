use knights_core::{Position, Report, Strategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Records kept in the history file
pub const MAX_RECORDS: usize = 50;

/// One finished (or abandoned) run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Unix timestamp when the run ended
    pub timestamp: u64,
    pub size: usize,
    pub origin: Position,
    pub requested: Strategy,
    pub solved_by: Strategy,
    /// Outcome label ("completed", "stuck", ...)
    pub outcome: String,
    /// Squares covered when the run ended
    pub squares_visited: usize,
    pub placed: usize,
    pub reverted: usize,
    pub elapsed_ms: u64,
}

impl RunRecord {
    pub fn from_report(report: &Report) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            timestamp,
            size: report.board.size(),
            origin: report.origin,
            requested: report.requested,
            solved_by: report.solved_by,
            outcome: report.outcome.label().to_string(),
            squares_visited: report.board.move_count(),
            placed: report.placed,
            reverted: report.reverted,
            elapsed_ms: u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// One-line summary for the history listing
    pub fn summary(&self) -> String {
        let strategy = if self.requested == self.solved_by {
            self.solved_by.to_string()
        } else {
            format!("{} -> {}", self.requested, self.solved_by)
        };
        format!(
            "{:>2}x{:<2} from {:<8} {:<26} {:<11} {:>5}/{:<5} {:>10} steps  {}",
            self.size,
            self.size,
            self.origin.to_string(),
            strategy,
            self.outcome,
            self.squares_visited,
            self.size * self.size,
            self.placed + self.reverted,
            format_elapsed(self.elapsed_ms)
        )
    }
}

/// Persistent list of recent runs, newest last
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    pub runs: Vec<RunRecord>,
}

impl History {
    /// Default location of the history file
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("knights_tour_history.json")
    }

    /// Load history, starting empty if the file is missing or unreadable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Append a run, dropping the oldest beyond [`MAX_RECORDS`]
    pub fn record(&mut self, record: RunRecord) {
        self.runs.push(record);
        if self.runs.len() > MAX_RECORDS {
            let excess = self.runs.len() - MAX_RECORDS;
            self.runs.drain(..excess);
        }
    }

    /// Most recent runs first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &RunRecord> + '_ {
        self.runs.iter().rev().take(limit)
    }
}

pub fn format_elapsed(ms: u64) -> String {
    if ms >= 60_000 {
        format!("{}:{:02}.{:03}", ms / 60_000, (ms / 1000) % 60, ms % 1000)
    } else {
        format!("{}.{:03}s", ms / 1000, ms % 1000)
    }
}
