mod animate;
mod config;
mod history;
mod logger;
mod render;
mod theme;

#[cfg(test)]
mod tests;

use animate::Animator;
use clap::Parser;
use config::{Cli, Command};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use history::{History, RunRecord};
use knights_core::{Board, BoardError, NoopObserver, Report, Solver};
use logger::FileLogger;
use std::io;

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = FileLogger::install(&FileLogger::default_path(), cli.log_level.into()) {
        eprintln!("Warning: could not open log file: {}", e);
    }

    let result = match cli.command {
        Some(Command::History { limit }) => show_history(limit),
        None => run(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn invalid_input(e: BoardError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, e)
}

/// Reject bad sizes and origins before touching the terminal
fn validate(cli: &Cli) -> Result<(), BoardError> {
    let board = Board::new(cli.size)?;
    if !board.contains(cli.origin) {
        return Err(BoardError::OriginOutOfBounds {
            origin: cli.origin,
            size: cli.size,
        });
    }
    Ok(())
}

fn run(cli: &Cli) -> io::Result<()> {
    validate(cli).map_err(invalid_input)?;
    let solver = Solver::new(cli.strategy()).with_origin(cli.origin);
    log::info!(
        "starting {} on {}x{} from {}",
        solver.strategy(),
        cli.size,
        cli.size,
        solver.origin()
    );

    let report = if cli.headless {
        let report = solver.solve(cli.size, &mut NoopObserver).map_err(invalid_input)?;
        print_report(cli, &report)?;
        report
    } else {
        run_animated(cli, &solver)?
    };

    if !cli.no_history {
        save_to_history(&report);
    }
    Ok(())
}

fn run_animated(cli: &Cli, solver: &Solver) -> io::Result<Report> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let mut animator = Animator::new(
        io::stdout(),
        cli.theme.theme(),
        cli.delay(),
        solver.strategy(),
        cli.size,
        solver.origin(),
    );
    let result = solver
        .solve(cli.size, &mut animator)
        .map_err(invalid_input)
        .and_then(|report| match animator.take_error() {
            Some(e) => Err(e),
            None => animator.finish(&report).map(|()| report),
        });

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    let report = result?;
    println!("{}", report.outcome);
    Ok(report)
}

fn print_report(cli: &Cli, report: &Report) -> io::Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    print!("{}", report.board);
    println!();
    if report.fell_back() {
        println!("Warnsdorff got stuck, fell back to backtracking");
    }
    println!("{}: {}", report.solved_by, report.outcome);
    println!(
        "Placed {}, reverted {}, in {}",
        report.placed,
        report.reverted,
        history::format_elapsed(report.elapsed.as_millis() as u64)
    );
    Ok(())
}

fn save_to_history(report: &Report) {
    let path = History::default_path();
    let mut history = History::load(&path);
    history.record(RunRecord::from_report(report));
    if let Err(e) = history.save(&path) {
        log::warn!("could not save history to {}: {}", path.display(), e);
    }
}

fn show_history(limit: usize) -> io::Result<()> {
    let history = History::load(&History::default_path());
    if history.runs.is_empty() {
        println!("No runs recorded yet.");
        return Ok(());
    }
    for record in history.recent(limit) {
        println!("{}", record.summary());
    }
    Ok(())
}
