// Author: Dustin Pilgrim
// License: MIT

/// Everything the event loop can feed the engine. Every variant carries the
/// instant it was observed at; the engine never reads the clock itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The input poll elapsed with no key. Drives the per-frame refresh.
    Tick {
        now: u64,
    },

    /// A digit key named a 1-based slot.
    ToggleSlot {
        slot: usize,
        now: u64,
    },

    /// Stop every timer and discard banked time.
    ZeroAll {
        now: u64,
    },

    /// Write the current set back to the config source.
    SaveRequested {
        now: u64,
    },

    Quit {
        now: u64,
    },
}

impl Event {
    pub fn now(&self) -> u64 {
        match self {
            Event::Tick { now }
            | Event::ToggleSlot { now, .. }
            | Event::ZeroAll { now }
            | Event::SaveRequested { now }
            | Event::Quit { now } => *now,
        }
    }

    /// The whole keymap, in one place. Unknown keys map to nothing and are
    /// dropped by the caller.
    pub fn from_key(key: char, now: u64) -> Option<Event> {
        match key {
            'q' => Some(Event::Quit { now }),
            's' => Some(Event::SaveRequested { now }),
            'z' => Some(Event::ZeroAll { now }),
            '1'..='9' => Some(Event::ToggleSlot {
                slot: key as usize - '0' as usize,
                now,
            }),
            _ => None,
        }
    }
}
