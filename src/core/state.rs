// Author: Dustin Pilgrim
// License: MIT

use crate::core::timer::{Timer, split_minutes};

/// Slot keys are the digits 1-9, so the set can never hold more than 9.
pub const MAX_TIMERS: usize = 9;

/// What the display surface receives for one timer, once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerRow {
    pub slot: usize,
    pub minutes: u64,
    pub seconds: u64,
    pub name: String,
    pub running: bool,
}

/// Ordered, fixed collection of timers. Built once at startup by the config
/// loader; slots are 1-based and fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSet {
    timers: Vec<Timer>,
}

impl TimerSet {
    /// The loader guarantees `1..=MAX_TIMERS` entries.
    pub fn new(timers: Vec<Timer>) -> Self {
        debug_assert!(!timers.is_empty() && timers.len() <= MAX_TIMERS);
        Self { timers }
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> impl Iterator<Item = &mut Timer> {
        self.timers.iter_mut()
    }

    /// Timer at a 1-based slot, or None when the slot is outside the loaded
    /// set. Out-of-range slots are not an error anywhere in the program.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Timer> {
        if slot == 0 {
            return None;
        }
        self.timers.get_mut(slot - 1)
    }

    pub fn zero_all(&mut self, now: u64) {
        for t in &mut self.timers {
            t.zero(now);
        }
    }

    /// Re-observe every timer as of `now` and build the display rows.
    /// Observation is what normalizes overrun timers, so this must run every
    /// frame, not only on keypress.
    pub fn snapshot(&mut self, now: u64) -> Vec<TimerRow> {
        self.timers
            .iter_mut()
            .enumerate()
            .map(|(i, t)| {
                let remaining = t.observe(now);
                let (minutes, seconds) = split_minutes(remaining);
                TimerRow {
                    slot: i + 1,
                    minutes,
                    seconds,
                    name: t.name().to_string(),
                    running: t.running(),
                }
            })
            .collect()
    }
}
