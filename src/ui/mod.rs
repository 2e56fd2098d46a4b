// Author: Dustin Pilgrim
// License: MIT

//! The terminal display surface. Renders rows and a status line, nothing
//! more: state lives in the engine, and this module never mutates it.
//! This is the only module that knows about crossterm.

pub mod event;

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::core::error::Error;
use crate::core::state::TimerRow;

/// Owns the terminal for the lifetime of the session. Dropping it restores
/// the previous screen and cooked mode on every exit path, error or not.
pub struct Display {
    out: Stdout,
}

impl Display {
    pub fn init() -> Result<Self, Error> {
        enable_raw_mode().map_err(init_error)?;

        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(init_error(e));
        }

        Ok(Self { out })
    }

    /// Draw one frame: a row every other line starting at y=2, and the
    /// transient status message below the rows.
    pub fn draw(&mut self, rows: &[TimerRow], status: Option<&str>) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        for row in rows {
            let y = (2 * row.slot) as u16;
            let clock = format!("{:>3}:{:02}", row.minutes, row.seconds);

            queue!(self.out, MoveTo(3, y))?;
            if row.running {
                queue!(
                    self.out,
                    SetForegroundColor(Color::Green),
                    Print(&clock),
                    ResetColor
                )?;
            } else {
                queue!(self.out, Print(&clock))?;
            }
            queue!(self.out, Print(format!("       {}", row.name)))?;
        }

        if let Some(message) = status {
            let y = (2 * rows.len() + 2) as u16;
            queue!(
                self.out,
                MoveTo(3, y),
                SetAttribute(Attribute::Dim),
                Print(message),
                SetAttribute(Attribute::Reset)
            )?;
        }

        queue!(self.out, MoveTo(0, 0))?;
        self.out.flush()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

fn init_error(e: io::Error) -> Error {
    Error::DisplayInit {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_with_padded_seconds() {
        let row = TimerRow {
            slot: 1,
            minutes: 3,
            seconds: 45,
            name: "work".to_string(),
            running: true,
        };
        assert_eq!(format!("{:>3}:{:02}", row.minutes, row.seconds), "  3:45");

        let (m, s) = (0, 5);
        assert_eq!(format!("{:>3}:{:02}", m, s), "  0:05");
    }
}
