use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::AppError;

/// Logging verbosity, named after the workflow tools' logger levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] =
        [LogLevel::Debug, LogLevel::Info, LogLevel::Warning, LogLevel::Error, LogLevel::Critical];

    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// `tracing` filter directive for this level.
    ///
    /// `tracing` has no level above error, so `CRITICAL` shares it.
    pub fn filter_directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL.into_iter().find(|level| level.name() == wanted).ok_or_else(|| {
            AppError::InvalidLogLevel {
                level: s.to_string(),
                supported: Self::ALL.map(Self::name).join(" | "),
            }
        })
    }
}

/// Logger setup requested by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggingOptions {
    pub level: LogLevel,
    /// Emit ANSI colours on the console.
    pub colored: bool,
    /// Mirror log output to this file.
    pub log_file: Option<PathBuf>,
}
