use crate::grid::{Cell, Grid};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

/// Terminal position `(column, row)`.
pub type Coords = (u16, u16);

/// Terminal columns per grid cell, so cells come out roughly square.
pub const CELL_COLS: u16 = 2;

/// Owns the terminal for the lifetime of the process: raw mode, the drawing
/// buffer behind message boxes, and key polling.
pub struct TermManager {
    width: u16,
    height: u16,
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: u16,
    height: u16,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let stdout = stdout();
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager { width, height, stdout, screen, current_msg: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("Error hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    /// Largest grid that fits inside a one-character border.
    pub fn max_grid_size(&self) -> (u16, u16) {
        (self.width.saturating_sub(2) / CELL_COLS, self.height.saturating_sub(2))
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    /// Waits up to `wait` for input, then drains whatever else is queued.
    pub fn read_key_events_queue(&self, wait: Duration) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut wait = wait;

        while poll(wait)? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
            wait = Duration::ZERO;
        }

        Ok(events)
    }

    /// Throws away pending input, so keys mashed during a crash do not skip
    /// the next screen.
    pub fn discard_key_events(&self) -> Result<()> {
        self.read_key_events_queue(Duration::ZERO).map(drop)
    }

    pub fn draw_borders(&mut self, grid: &Grid) -> Result<()> {
        let width = grid.width() as u16 * CELL_COLS + 2;
        let height = grid.height() as u16 + 2;
        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        Ok(())
    }

    /// Draws `ch` over the whole cell. Cells outside the grid are skipped.
    pub fn print_cell(&mut self, grid: &Grid, cell: Cell, ch: char) -> Result<()> {
        if !grid.contains(cell) {
            return Ok(());
        }

        let x = 1 + cell.0 as u16 * CELL_COLS;
        let y = 1 + cell.1 as u16;
        for col in 0..CELL_COLS {
            self.print_at((x + col, y), ch)?;
        }

        Ok(())
    }

    pub fn print_str_at(&mut self, pos: Coords, text: &str) -> Result<()> {
        for (i, ch) in text.chars().enumerate() {
            self.print_at((pos.0 + i as u16, pos.1), ch)?;
        }

        Ok(())
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as u16;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as u16;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        // Blank top and bottom padding rows
        for y in [top_left.1, top_left.1 + msg_height - 1] {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, y), ' ')?;
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as u16 + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save((top_left.0 + x_diff as u16, y), ch)?;
            }
        }

        self.current_msg = Some(Message { width: msg_width, height: msg_height, top_left });
        self.flush()
    }

    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };

        // Put back what the message covered
        for y_diff in 0..msg.height {
            for x_diff in 0..msg.width {
                let (x, y) = (msg.top_left.0 + x_diff, msg.top_left.1 + y_diff);
                if let Some(index) = self.index(x, y) {
                    let ch = self.screen[index];
                    self.print_at_no_save((x, y), ch)?;
                }
            }
        }

        self.flush()
    }

    /// Draws `ch` and remembers it. Positions off the terminal are ignored.
    pub fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        if let Some(index) = self.index(pos.0, pos.1) {
            self.screen[index] = ch;
            self.print_at_no_save(pos, ch)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing")?;
        self.current_msg = None;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.width as usize * y as usize + x as usize)
    }

    // Used for message boxes, which must not overwrite the buffer they are
    // restored from when hidden.
    fn print_at_no_save(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }
}
