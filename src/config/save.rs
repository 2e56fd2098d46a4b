// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use crate::core::error::Error;
use crate::core::state::TimerSet;

/// Serialize the set into the same text shape the loader reads.
///
/// Values are written as whole minutes, rounding down; any sub-minute
/// remainder is lost. That is the format's documented precision, inherited
/// from the loader's `<N>M` grammar. A running timer is written with its
/// minute-truncated remainder as of `now` — stop timers first when an exact
/// resumption value matters.
pub fn render(set: &mut TimerSet, now: u64) -> String {
    let mut out = String::new();
    for timer in set.timers_mut() {
        let remaining = timer.observe(now);
        out.push_str(&format!("{}={}M\n", timer.name(), remaining / 60));
    }
    out
}

/// Write the rendered set to `path`, replacing the previous contents.
pub fn save_to_path(set: &mut TimerSet, path: &Path, now: u64) -> Result<(), Error> {
    let text = render(set, now);
    std::fs::write(path, text).map_err(|e| Error::PersistenceWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
