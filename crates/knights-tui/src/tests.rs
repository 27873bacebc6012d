//! Tests for the terminal front-end

#[cfg(test)]
mod tests {
    use crate::animate::{faster, key_action, slower, KeyAction};
    use crate::config::{parse_origin, Cli, Command, LogLevelArg, StrategyArg};
    use crate::history::{format_elapsed, History, RunRecord, MAX_RECORDS};
    use crate::render::Layout;
    use crate::validate;
    use clap::Parser;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use knights_core::{Board, BoardError, NoopObserver, Position, Solver, Strategy};
    use std::time::Duration;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("knights").chain(args.iter().copied())).unwrap()
    }

    fn record(size: usize) -> RunRecord {
        let report = Solver::new(Strategy::Warnsdorff)
            .solve(size, &mut NoopObserver)
            .unwrap();
        RunRecord::from_report(&report)
    }

    #[test]
    fn test_cli_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.size, 8);
        assert_eq!(cli.origin, Position::new(0, 0));
        assert_eq!(cli.strategy(), Strategy::Warnsdorff);
        assert_eq!(cli.delay(), Duration::from_millis(500));
        assert_eq!(cli.log_level, LogLevelArg::Warn);
        assert!(!cli.headless);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_options() {
        let cli = parse(&["-n", "6", "--origin", "2,3", "--strategy", "backtracking", "--headless", "--json"]);
        assert_eq!(cli.size, 6);
        assert_eq!(cli.origin, Position::new(2, 3));
        assert_eq!(cli.strategy, StrategyArg::Backtracking);
        assert_eq!(cli.delay(), Duration::from_millis(50));
        assert!(cli.headless && cli.json);

        let cli = parse(&["--strategy", "auto", "--delay-ms", "0"]);
        assert_eq!(cli.strategy(), Strategy::Auto);
        assert_eq!(cli.delay(), Duration::ZERO);
    }

    #[test]
    fn test_json_requires_headless() {
        assert!(Cli::try_parse_from(["knights", "--json"]).is_err());
    }

    #[test]
    fn test_history_subcommand() {
        let cli = parse(&["history", "--limit", "3"]);
        assert_eq!(cli.command, Some(Command::History { limit: 3 }));
    }

    #[test]
    fn test_parse_origin() {
        assert_eq!(parse_origin("3,4"), Ok(Position::new(3, 4)));
        assert_eq!(parse_origin(" 1 , 0 "), Ok(Position::new(1, 0)));
        assert!(parse_origin("3").is_err());
        assert!(parse_origin("a,1").is_err());
        assert!(parse_origin("-1,1").is_err());
    }

    #[test]
    fn test_validate_input() {
        assert_eq!(validate(&parse(&["-n", "5", "-o", "4,4"])), Ok(()));
        assert_eq!(validate(&parse(&["-n", "0"])), Err(BoardError::InvalidSize(0)));
        assert_eq!(
            validate(&parse(&["-n", "5", "-o", "5,0"])),
            Err(BoardError::OriginOutOfBounds {
                origin: Position::new(5, 0),
                size: 5
            })
        );
    }

    #[test]
    fn test_key_actions() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_action(press(KeyCode::Char('q'))), KeyAction::Cancel);
        assert_eq!(key_action(press(KeyCode::Esc)), KeyAction::Cancel);
        assert_eq!(key_action(press(KeyCode::Char(' '))), KeyAction::TogglePause);
        assert_eq!(key_action(press(KeyCode::Char('+'))), KeyAction::Faster);
        assert_eq!(key_action(press(KeyCode::Char('-'))), KeyAction::Slower);
        assert_eq!(key_action(press(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Cancel
        );

        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_action(release), KeyAction::None);
    }

    #[test]
    fn test_speed_changes() {
        assert_eq!(faster(Duration::from_millis(500)), Duration::from_millis(250));
        assert_eq!(slower(Duration::from_millis(500)), Duration::from_millis(1000));
        assert_eq!(slower(Duration::from_millis(1500)), Duration::from_millis(2000));
        assert_eq!(slower(Duration::ZERO), Duration::from_millis(10));
    }

    #[test]
    fn test_layout_centers_board() {
        let board = Board::new(8).unwrap();
        let layout = Layout::compute(board.size(), board.label_width(), 120, 40);
        // 8 cells of 4 columns, plus the panel
        assert_eq!(layout.board_x, (120 - (32 + 37)) / 2);
        assert_eq!(layout.panel_x, layout.board_x + 32 + 3);
        assert_eq!(layout.board_y, 2);
        assert!(layout.status_y > layout.board_y + 8);

        let tiny = Layout::compute(board.size(), board.label_width(), 20, 10);
        assert_eq!(tiny.board_x, 1);
        assert_eq!(tiny.board_y, 1);
    }

    #[test]
    fn test_layout_saturates_on_huge_boards() {
        // 7000 columns of 10-wide cells overflow u16
        let layout = Layout::compute(7000, 8, 200, 50);
        assert_eq!(layout.board_x, 1);
        assert_eq!(layout.board_y, 1);
        assert_eq!(layout.panel_x, u16::MAX);
        assert_eq!(layout.status_y, 7000 + 1 + 1);

        let layout = Layout::compute(70_000, 10, 200, 50);
        assert_eq!(layout.panel_x, u16::MAX);
        assert_eq!(layout.status_y, u16::MAX);
    }

    #[test]
    fn test_run_record_from_report() {
        let run = record(5);
        assert_eq!(run.size, 5);
        assert_eq!(run.outcome, "completed");
        assert_eq!(run.squares_visited, 25);
        assert_eq!(run.placed, 25);
        assert_eq!(run.reverted, 0);
        assert!(run.summary().contains("Warnsdorff"));
        assert!(run.summary().contains("completed"));
    }

    #[test]
    fn test_history_is_capped() {
        let mut history = History::default();
        for i in 0..MAX_RECORDS + 5 {
            let mut run = record(5);
            run.timestamp = i as u64;
            history.record(run);
        }
        assert_eq!(history.runs.len(), MAX_RECORDS);
        assert_eq!(history.runs[0].timestamp, 5);

        let recent: Vec<u64> = history.recent(3).map(|r| r.timestamp).collect();
        let last = (MAX_RECORDS + 4) as u64;
        assert_eq!(recent, vec![last, last - 1, last - 2]);
    }

    #[test]
    fn test_history_round_trips_through_file() {
        let path = std::env::temp_dir().join(format!("knights_history_test_{}.json", std::process::id()));
        let mut history = History::default();
        history.record(record(6));
        history.save(&path).unwrap();

        let loaded = History::load(&path);
        assert_eq!(loaded.runs, history.runs);
        let _ = std::fs::remove_file(&path);

        // missing files load as empty
        assert!(History::load(&path).runs.is_empty());
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(1_234), "1.234s");
        assert_eq!(format_elapsed(61_005), "1:01.005");
    }
}
