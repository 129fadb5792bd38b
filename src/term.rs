use crate::{Coords, TermInt};
use crate::config::{BOARD_COLS, BOARD_ROWS, CELL_COLUMNS, CELL_SIZE, EMPTY_GLYPH};
use crate::error::{GameError, Result};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};
use log::debug;

/// Terminal columns and rows taken by the board plus its border
pub const SCREEN_SIZE: (TermInt, TermInt) = (
    BOARD_COLS as TermInt * CELL_COLUMNS + 2,
    BOARD_ROWS as TermInt + 2,
);

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    frame: Frame,
}

/// In-memory picture of the board, one glyph per cell.
pub struct Frame {
    cells: Vec<[char; 2]>,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout(), frame: Frame::new() })
    }

    pub fn setup(&mut self) -> Result<()> {
        if self.width < SCREEN_SIZE.0 || self.height < SCREEN_SIZE.1 {
            return Err(GameError::TerminalTooSmall {
                needed: SCREEN_SIZE,
                actual: (self.width, self.height),
            });
        }

        debug!("terminal is {}x{}, entering alternate screen", self.width, self.height);
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        debug!("restoring terminal");
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    pub fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = SCREEN_SIZE;
        let end_y = height - 1;

        let horizontal = format!("+{}+", "-".repeat(width as usize - 2));
        queue!(self.stdout, cursor::MoveTo(0, 0), style::Print(&horizontal))?;
        queue!(self.stdout, cursor::MoveTo(0, end_y), style::Print(&horizontal))?;

        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(width - 1, y), style::Print('|'))?;
        }

        self.flush()
    }

    /// Writes the current frame to the screen, one row at a time.
    pub fn present(&mut self) -> Result<()> {
        for (y, row) in self.frame.rows().enumerate() {
            queue!(self.stdout, cursor::MoveTo(1, y as TermInt + 1), style::Print(row))?;
        }
        Ok(())
    }

    /// Prints text over the top border.
    pub fn print_status(&mut self, text: &str) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(2, 0), style::Print(text))?;
        Ok(())
    }

    /// Shows a boxed message in the middle of the board. The next frame draws over it.
    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (SCREEN_SIZE.0 / 2, SCREEN_SIZE.1 / 2);
        let top_left = (center.0 - msg_width / 2, center.1 - msg_height / 2);

        let blank = " ".repeat(msg_width as usize);
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            queue!(self.stdout, cursor::MoveTo(top_left.0, *y), style::Print(&blank))?;
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            queue!(self.stdout, cursor::MoveTo(top_left.0, y), style::Print(padded_line))?;
        }

        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.frame.clear();
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl Frame {
    pub fn new() -> Self {
        Frame { cells: vec![EMPTY_GLYPH; (BOARD_COLS * BOARD_ROWS) as usize] }
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = EMPTY_GLYPH;
        }
    }

    /// Puts a glyph on the cell containing `pos`. Off-board positions are skipped.
    pub fn put(&mut self, pos: Coords, glyph: [char; 2]) {
        let (col, row) = (pos.0.div_euclid(CELL_SIZE), pos.1.div_euclid(CELL_SIZE));
        if pos.0 < 0 || pos.1 < 0 || col >= BOARD_COLS || row >= BOARD_ROWS {
            return;
        }
        self.cells[(row * BOARD_COLS + col) as usize] = glyph;
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(BOARD_COLS as usize)
            .map(|row| row.iter().flat_map(|glyph| glyph.iter()).collect())
    }
}
