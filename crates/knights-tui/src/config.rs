use crate::theme::Theme;
use clap::{Parser, Subcommand, ValueEnum};
use knights_core::{Position, Strategy};
use std::time::Duration;

/// Watch a knight tour an N×N board
#[derive(Debug, Parser)]
#[command(name = "knights", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Board side length
    #[arg(short = 'n', long, default_value_t = 8)]
    pub size: usize,

    /// Starting square as ROW,COL
    #[arg(short, long, default_value = "0,0", value_parser = parse_origin)]
    pub origin: Position,

    /// Solving strategy
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Warnsdorff)]
    pub strategy: StrategyArg,

    /// Delay between animation steps (defaults to 500 for warnsdorff, 50 otherwise)
    #[arg(short, long)]
    pub delay_ms: Option<u64>,

    /// Skip the animation and print the final board
    #[arg(long)]
    pub headless: bool,

    /// Print the run report as JSON (headless only)
    #[arg(long, requires = "headless")]
    pub json: bool,

    /// Color theme for the animation
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    pub theme: ThemeArg,

    /// Log level written to the log file
    #[arg(long, value_enum, default_value_t = LogLevelArg::Warn)]
    pub log_level: LogLevelArg,

    /// Do not record this run in the history file
    #[arg(long)]
    pub no_history: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show recently recorded runs
    History {
        /// Number of runs to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Warnsdorff,
    Backtracking,
    Auto,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Warnsdorff => Strategy::Warnsdorff,
            StrategyArg::Backtracking => Strategy::Backtracking,
            StrategyArg::Auto => Strategy::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
    HighContrast,
}

impl ThemeArg {
    pub fn theme(self) -> Theme {
        match self {
            ThemeArg::Dark => Theme::dark(),
            ThemeArg::Light => Theme::light(),
            ThemeArg::HighContrast => Theme::high_contrast(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for log::LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn strategy(&self) -> Strategy {
        self.strategy.into()
    }

    /// Pause between animation frames
    pub fn delay(&self) -> Duration {
        let ms = self.delay_ms.unwrap_or(match self.strategy {
            StrategyArg::Warnsdorff => 500,
            StrategyArg::Backtracking | StrategyArg::Auto => 50,
        });
        Duration::from_millis(ms)
    }
}

/// Parse `ROW,COL` into a position.
pub fn parse_origin(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let x = x.trim().parse().map_err(|e| format!("bad row '{}': {}", x.trim(), e))?;
    let y = y.trim().parse().map_err(|e| format!("bad column '{}': {}", y.trim(), e))?;
    Ok(Position::new(x, y))
}
