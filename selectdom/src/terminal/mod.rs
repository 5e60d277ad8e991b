use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::text::fit_to_width;

/// A row of text plus the attributes to draw it with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl Row {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn dim(mut self, dim: bool) -> Self {
        self.dim = dim;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

pub struct Terminal {
    stdout: io::Stdout,
    previous: Vec<Row>,
    size: (u16, u16),
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let size = terminal::size()?;
        Ok(Self {
            stdout,
            previous: Vec::new(),
            size,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw rows from the top of the screen, rewriting only rows that changed.
    pub fn draw(&mut self, rows: &[Row]) -> io::Result<()> {
        let size = terminal::size()?;
        if size != self.size {
            self.size = size;
            self.previous.clear();
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }
        let (width, height) = self.size;

        for y in 0..height as usize {
            let row = rows.get(y).cloned().unwrap_or_default();
            if self.previous.get(y) == Some(&row) {
                continue;
            }

            queue!(self.stdout, cursor::MoveTo(0, y as u16), SetAttribute(Attribute::Reset))?;
            if row.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if row.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }
            if row.reverse {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(self.stdout, Print(fit_to_width(&row.text, width as usize)))?;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.previous = rows.to_vec();
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
