// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    action::Action,
    events::Event,
    state::{TimerRow, TimerSet},
};

/// Owns the timer collection and applies events to it. Every operation is
/// total: bad slots are ignored, time arithmetic saturates, and nothing here
/// can fail.
#[derive(Debug)]
pub struct Engine {
    set: TimerSet,
}

impl Engine {
    pub fn new(set: TimerSet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> &TimerSet {
        &self.set
    }

    pub fn set_mut(&mut self) -> &mut TimerSet {
        &mut self.set
    }

    /// Apply one event. State changes happen in place; the returned actions
    /// are the effects the runtime must execute afterwards.
    pub fn handle_event(&mut self, event: Event) -> Vec<Action> {
        let now = event.now();

        match event {
            // The redraw that follows every event re-observes the set, so a
            // tick has no work of its own.
            Event::Tick { .. } => Vec::new(),

            Event::ToggleSlot { slot, .. } => {
                if let Some(timer) = self.set.get_mut(slot) {
                    timer.toggle(now);
                }
                Vec::new()
            }

            Event::ZeroAll { .. } => {
                self.set.zero_all(now);
                Vec::new()
            }

            Event::SaveRequested { .. } => vec![Action::Persist],

            Event::Quit { .. } => vec![Action::Quit],
        }
    }

    /// Per-frame display rows, re-observed as of `now`.
    pub fn snapshot(&mut self, now: u64) -> Vec<TimerRow> {
        self.set.snapshot(now)
    }
}
