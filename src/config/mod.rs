use std::path::Path;

use crate::core::error::ConfigError;
use crate::core::state::TimerSet;
use crate::sdebug;

pub mod parser;
pub mod save;

/// Read and parse the timer definitions. All-or-nothing: any unreadable or
/// malformed input fails the whole load.
pub fn load_from_path(path: &Path) -> Result<TimerSet, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        sdebug!("Config", "read of {} failed: {e}", path.display());
        ConfigError::NotFound {
            path: path.display().to_string(),
        }
    })?;

    parser::parse(&text)
}
