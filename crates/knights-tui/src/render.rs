use crate::theme::Theme;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use knights_core::{Board, Position};
use std::io::{self, Write};

/// Width reserved for the info panel right of the board
const PANEL_WIDTH: u16 = 34;
/// Rows taken by the info panel
const PANEL_HEIGHT: u16 = 16;

/// Everything the info panel shows
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub phase: String,
    pub size: usize,
    pub origin: Position,
    pub move_index: usize,
    pub placed: usize,
    pub reverted: usize,
    pub delay_ms: u64,
    pub paused: bool,
}

/// Screen placement of the board and the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board_x: u16,
    pub board_y: u16,
    pub panel_x: u16,
    pub status_y: u16,
}

impl Layout {
    /// Center a `size`-wide board with `label_width`-digit cells and the
    /// panel in a terminal of the given size
    pub fn compute(size: usize, label_width: usize, term_width: u16, term_height: u16) -> Self {
        // terminal coordinates are u16; anything larger pins to the edge
        let cell_width = clamp_u16(label_width).saturating_add(2);
        let size = clamp_u16(size);
        let board_width = size.saturating_mul(cell_width);
        let total_width = board_width.saturating_add(PANEL_WIDTH + 3);

        let board_x = if term_width > total_width {
            (term_width - total_width) / 2
        } else {
            1
        };
        let board_y = if term_height > size.saturating_add(6) { 2 } else { 1 };

        Self {
            board_x,
            board_y,
            panel_x: board_x.saturating_add(board_width).saturating_add(3),
            status_y: board_y.saturating_add(size.max(PANEL_HEIGHT)).saturating_add(1),
        }
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Clear the screen and lay out a fresh frame
pub fn begin_frame(stdout: &mut io::Stdout, theme: &Theme) -> io::Result<()> {
    queue!(
        stdout,
        Hide,
        SetBackgroundColor(theme.bg),
        Clear(ClearType::All)
    )
}

pub fn layout_for(board: &Board) -> io::Result<Layout> {
    let (term_width, term_height) = terminal::size()?;
    Ok(Layout::compute(board.size(), board.label_width(), term_width, term_height))
}

/// Draw the board; `knight` and `reverted` get highlighted.
pub fn render_board(
    stdout: &mut io::Stdout,
    board: &Board,
    theme: &Theme,
    layout: &Layout,
    knight: Option<Position>,
    reverted: Option<Position>,
) -> io::Result<()> {
    let width = board.label_width();

    for (x, row) in board.rows().enumerate() {
        let line = layout.board_y.saturating_add(clamp_u16(x));
        if line == u16::MAX {
            break;
        }
        queue!(stdout, MoveTo(layout.board_x, line))?;
        for (y, cell) in row.iter().enumerate() {
            let pos = Position::new(x, y);
            let (mut bg, mut fg) = theme.square_colors(x, y);
            if Some(pos) == knight {
                bg = theme.knight_bg;
                fg = theme.fg;
            } else if Some(pos) == reverted {
                bg = theme.reverted_bg;
                fg = theme.fg;
            }

            let text = match cell {
                Some(label) => format!(" {:0width$} ", label, width = width),
                None if Some(pos) == reverted => format!(" {:^width$} ", "x", width = width),
                None => " ".repeat(width + 2),
            };
            queue!(stdout, SetBackgroundColor(bg), SetForegroundColor(fg), Print(text))?;
        }
    }

    queue!(stdout, SetBackgroundColor(theme.bg))
}

pub fn render_panel(stdout: &mut io::Stdout, panel: &Panel, theme: &Theme, layout: &Layout) -> io::Result<()> {
    let x = layout.panel_x;
    let mut y = layout.board_y;

    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.fg),
        Print(format!("{:<width$}", panel.title, width = PANEL_WIDTH as usize))
    )?;
    y += 2;

    let squares = panel.size.saturating_mul(panel.size);
    let lines = [
        ("Solver", panel.phase.clone()),
        ("Board", format!("{}x{}", panel.size, panel.size)),
        ("Origin", panel.origin.to_string()),
        ("Move", format!("{} / {}", panel.move_index, squares.saturating_sub(1))),
        ("Placed", panel.placed.to_string()),
        ("Reverted", panel.reverted.to_string()),
        ("Delay", format!("{} ms", panel.delay_ms)),
    ];
    for (label, value) in lines {
        queue!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(theme.info),
            Print(format!("{:<10}", label)),
            SetForegroundColor(theme.fg),
            Print(format!("{:<22}", value))
        )?;
        y += 1;
    }

    y += 1;
    let state = if panel.paused { "PAUSED" } else { "" };
    queue!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        Print(format!("{:<10}", state))
    )?;
    y += 2;

    render_controls(stdout, theme, x, y)
}

fn render_controls(stdout: &mut io::Stdout, theme: &Theme, x: u16, y: u16) -> io::Result<()> {
    let controls = [("Space", "pause"), ("+/-", "speed"), ("q", "stop")];
    for (i, (key, action)) in controls.iter().enumerate() {
        queue!(
            stdout,
            MoveTo(x, y + i as u16),
            SetForegroundColor(theme.key),
            Print(format!("{:<7}", key)),
            SetForegroundColor(theme.info),
            Print(*action)
        )?;
    }
    Ok(())
}

/// Status line below the board
pub fn render_status(
    stdout: &mut io::Stdout,
    layout: &Layout,
    text: &str,
    color: Color,
) -> io::Result<()> {
    queue!(
        stdout,
        MoveTo(layout.board_x, layout.status_y),
        Clear(ClearType::CurrentLine),
        SetForegroundColor(color),
        Print(text)
    )
}

pub fn end_frame(stdout: &mut io::Stdout) -> io::Result<()> {
    queue!(stdout, ResetColor, Show)?;
    stdout.flush()
}
