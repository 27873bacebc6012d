use crate::render::{self, Layout, Panel};
use crate::theme::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use knights_core::{
    Board, Control, Outcome, Position, Report, StepEvent, StepKind, StepObserver, Strategy,
};
use std::io;
use std::time::{Duration, Instant};

/// Minimum time between redraws when running without a delay
const FRAME_INTERVAL: Duration = Duration::from_millis(33);
/// Longest allowed step delay
const MAX_DELAY: Duration = Duration::from_millis(2_000);

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Cancel,
    TogglePause,
    Faster,
    Slower,
}

/// Map a key press to an animation action
pub fn key_action(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Cancel;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Char(' ') | KeyCode::Char('p') => KeyAction::TogglePause,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => KeyAction::Faster,
        KeyCode::Char('-') | KeyCode::Left => KeyAction::Slower,
        _ => KeyAction::None,
    }
}

/// Halve the delay
pub fn faster(delay: Duration) -> Duration {
    delay / 2
}

/// Double the delay, up to [`MAX_DELAY`]
pub fn slower(delay: Duration) -> Duration {
    if delay.is_zero() {
        Duration::from_millis(10)
    } else {
        (delay * 2).min(MAX_DELAY)
    }
}

/// Renders solver steps into the terminal and paces them.
///
/// Terminal errors cancel the run; the first one is kept for the caller.
pub struct Animator {
    stdout: io::Stdout,
    theme: Theme,
    delay: Duration,
    paused: bool,
    strategy: Strategy,
    runs_started: usize,
    panel: Panel,
    layout: Option<Layout>,
    knight: Option<Position>,
    reverted: Option<Position>,
    last_frame: Option<Instant>,
    error: Option<io::Error>,
}

impl Animator {
    pub fn new(
        stdout: io::Stdout,
        theme: Theme,
        delay: Duration,
        strategy: Strategy,
        size: usize,
        origin: Position,
    ) -> Self {
        Self {
            stdout,
            theme,
            delay,
            paused: false,
            strategy,
            runs_started: 0,
            panel: Panel {
                title: "Knight's Tour".to_string(),
                phase: strategy.to_string(),
                size,
                origin,
                move_index: 0,
                placed: 0,
                reverted: 0,
                delay_ms: delay.as_millis() as u64,
                paused: false,
            },
            layout: None,
            knight: None,
            reverted: None,
            last_frame: None,
            error: None,
        }
    }

    /// Terminal error that stopped the run, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn phase_label(&self) -> String {
        match (self.strategy, self.runs_started) {
            (Strategy::Auto, n) if n > 1 => "Backtracking (fallback)".to_string(),
            (Strategy::Auto, _) => "Warnsdorff (auto)".to_string(),
            (strategy, _) => strategy.to_string(),
        }
    }

    fn record(&mut self, event: &StepEvent<'_>) {
        match event.kind {
            StepKind::Placed => {
                if event.move_index == 0 {
                    self.runs_started += 1;
                    self.panel.phase = self.phase_label();
                    // a new run starts on a new board
                    self.layout = None;
                }
                self.panel.placed += 1;
                self.knight = Some(event.position);
                self.reverted = None;
                self.panel.move_index = event.move_index;
            }
            StepKind::Reverted => {
                self.panel.reverted += 1;
                self.reverted = Some(event.position);
                // the knight steps back to the previous square
                self.knight = event
                    .board
                    .move_count()
                    .checked_sub(1)
                    .and_then(|label| previous_square(event.board, label));
                self.panel.move_index = event.move_index.saturating_sub(1);
            }
        }
    }

    fn draw(&mut self, board: &Board) -> io::Result<()> {
        let layout = match self.layout {
            Some(layout) => layout,
            None => {
                render::begin_frame(&mut self.stdout, &self.theme)?;
                let layout = render::layout_for(board)?;
                self.layout = Some(layout);
                layout
            }
        };
        self.panel.paused = self.paused;
        self.panel.delay_ms = self.delay.as_millis() as u64;
        render::render_board(&mut self.stdout, board, &self.theme, &layout, self.knight, self.reverted)?;
        render::render_panel(&mut self.stdout, &self.panel, &self.theme, &layout)?;
        render::end_frame(&mut self.stdout)?;
        self.last_frame = Some(Instant::now());
        Ok(())
    }

    /// Apply a key press, redrawing if the panel changed
    fn apply(&mut self, action: KeyAction, board: &Board) -> io::Result<Control> {
        match action {
            KeyAction::Cancel => return Ok(Control::Cancel),
            KeyAction::TogglePause => self.paused = !self.paused,
            KeyAction::Faster => self.delay = faster(self.delay),
            KeyAction::Slower => self.delay = slower(self.delay),
            KeyAction::None => return Ok(Control::Continue),
        }
        self.draw(board)?;
        Ok(Control::Continue)
    }

    /// Wait out the step delay while listening for keys
    fn pace(&mut self, board: &Board) -> io::Result<Control> {
        let started = Instant::now();
        loop {
            let remaining = if self.paused {
                Duration::from_millis(100)
            } else {
                self.delay.saturating_sub(started.elapsed())
            };
            if event::poll(remaining)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.apply(key_action(key), board)? == Control::Cancel {
                            return Ok(Control::Cancel);
                        }
                    }
                    Event::Resize(_, _) => {
                        self.layout = None;
                        self.draw(board)?;
                    }
                    _ => {}
                }
            }
            if !self.paused && started.elapsed() >= self.delay {
                return Ok(Control::Continue);
            }
        }
    }

    fn step(&mut self, event: &StepEvent<'_>) -> io::Result<Control> {
        self.record(event);
        let frame_due = !self.delay.is_zero()
            || self.layout.is_none()
            || self.last_frame.map_or(true, |t| t.elapsed() >= FRAME_INTERVAL);
        if !frame_due {
            return Ok(Control::Continue);
        }
        self.draw(event.board)?;
        self.pace(event.board)
    }

    /// Draw the final board with the outcome and wait for a key
    pub fn finish(&mut self, report: &Report) -> io::Result<()> {
        self.layout = None;
        self.knight = report.outcome.path().and_then(|path| path.last().copied());
        self.reverted = None;
        self.panel.phase = report.solved_by.to_string();
        self.draw(&report.board)?;

        let color = match report.outcome {
            Outcome::Completed { .. } => self.theme.success,
            Outcome::Stuck { .. } | Outcome::NoSolution => self.theme.error,
            Outcome::Cancelled => self.theme.info,
        };
        let text = format!("{} - press any key to exit", capitalize(&report.outcome.to_string()));
        if let Some(layout) = self.layout {
            render::render_status(&mut self.stdout, &layout, &text, color)?;
        }
        render::end_frame(&mut self.stdout)?;

        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl StepObserver for Animator {
    fn on_step(&mut self, event: &StepEvent<'_>) -> Control {
        match self.step(event) {
            Ok(control) => control,
            Err(e) => {
                log::error!("terminal error during animation: {}", e);
                self.error.get_or_insert(e);
                Control::Cancel
            }
        }
    }
}

/// Square holding `label`, found by scanning the board
fn previous_square(board: &Board, label: usize) -> Option<Position> {
    board.positions().find(|&pos| board.get(pos) == Some(label))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
