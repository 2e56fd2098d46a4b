// Author: Dustin Pilgrim
// License: MIT

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};

/// Keyboard input, decoded just far enough for the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(char),

    /// Ctrl-C. Raw mode delivers it as a key event, not a signal.
    ForceQuit,

    Resize,
}

/// Bounded wait for one input event. Returns None when the timeout elapses
/// with no input, which is the normal refresh path: the poll must never
/// block unbounded or displayed values go stale.
pub fn poll_input(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(InputEvent::ForceQuit));
            }
            match key.code {
                KeyCode::Char(c) => Ok(Some(InputEvent::Key(c))),
                _ => Ok(None),
            }
        }
        TermEvent::Resize(_, _) => Ok(Some(InputEvent::Resize)),
        _ => Ok(None),
    }
}
