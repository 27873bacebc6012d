//! Basic example of using the knight's tour engine

use knights_core::{Board, BacktrackingSolver, EventLog, NoopObserver, Position, Solver, StepKind, Strategy};

fn main() {
    // Greedy walk on a standard board
    println!("Warnsdorff on 8x8 from (0, 0)...\n");
    match Solver::new(Strategy::Warnsdorff).solve(8, &mut NoopObserver) {
        Ok(report) => {
            println!("{}", report.board);
            println!("Outcome: {} ({:?})\n", report.outcome, report.elapsed);
        }
        Err(e) => println!("Error: {}", e),
    }

    // Exhaustive search, recording every step
    println!("Backtracking on 5x5 from (0, 0)...\n");
    let mut board = match Board::new(5) {
        Ok(board) => board,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    let mut log = EventLog::new();
    match BacktrackingSolver::new().run(&mut board, Position::new(0, 0), &mut log) {
        Ok(outcome) => {
            println!("{}", board);
            println!("Outcome: {}", outcome);
            println!(
                "Placements: {}, reverts: {}\n",
                log.count(StepKind::Placed),
                log.count(StepKind::Reverted)
            );
        }
        Err(e) => println!("Error: {}", e),
    }

    // Fall back to search when the greedy walk gets stuck
    println!("Auto on 5x5 from (0, 2)...\n");
    let solver = Solver::new(Strategy::Auto).with_origin(Position::new(0, 2));
    if let Ok(report) = solver.solve(5, &mut NoopObserver) {
        println!("{}", report.board);
        println!("Solved by {}: {}", report.solved_by, report.outcome);
    }
}
