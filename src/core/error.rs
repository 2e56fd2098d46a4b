// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Loading the timer definitions failed. Always fatal: there is no
    /// partial or degraded startup.
    Config(ConfigError),

    /// Writing the set back to disk failed. Reported on the status line;
    /// the session continues.
    PersistenceWrite { path: String, message: String },

    /// The terminal could not be put into display mode.
    DisplayInit { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config file could not be opened/read.
    NotFound { path: String },

    /// A line matched neither a timer definition nor a comment/blank line.
    Parse { line: usize, content: String },

    /// The file parsed cleanly but defined no timers.
    Empty,

    /// More timers than there are slot keys.
    CapacityExceeded { count: usize },

    /// A timer name exceeded the maximum length.
    NameTooLong { line: usize, name: String },
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "{e}"),
            Error::PersistenceWrite { path, message } =>
                write!(f, "failed to save {path}: {message}"),
            Error::DisplayInit { message } =>
                write!(f, "failed to initialize the display: {message}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound { path } =>
                write!(f, "failed to open {path}"),
            ConfigError::Parse { line, content } =>
                write!(f, "failed to parse line {line} ({content})"),
            ConfigError::Empty =>
                write!(f, "no timers defined"),
            ConfigError::CapacityExceeded { count } =>
                write!(
                    f,
                    "{count} timers defined, at most {} fit on the slot keys",
                    crate::core::state::MAX_TIMERS
                ),
            ConfigError::NameTooLong { line, name } =>
                write!(f, "timer name on line {line} is too long ({name})"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}
