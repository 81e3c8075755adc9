//! Logging verbosity names accepted by the reader.

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// A logging level, ordered from quietest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LoggingLevel {
    /// Nothing is logged.
    #[default]
    Silent,
    /// Finest-grained tracing output.
    Trace,
    /// Developer diagnostics.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something unexpected that the process survives.
    Warn,
    /// A failed operation.
    Error,
    /// The process cannot continue.
    Fatal,
}

/// The input was not one of the seven level names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported logging level: {0}")]
pub struct UnknownLevel(pub String);

impl LoggingLevel {
    /// Every level, in ascending severity.
    pub const ALL: [LoggingLevel; 7] = [
        LoggingLevel::Silent,
        LoggingLevel::Trace,
        LoggingLevel::Debug,
        LoggingLevel::Info,
        LoggingLevel::Warn,
        LoggingLevel::Error,
        LoggingLevel::Fatal,
    ];

    /// The lowercase name used in configuration values.
    pub const fn as_str(self) -> &'static str {
        match self {
            LoggingLevel::Silent => "silent",
            LoggingLevel::Trace => "trace",
            LoggingLevel::Debug => "debug",
            LoggingLevel::Info => "info",
            LoggingLevel::Warn => "warn",
            LoggingLevel::Error => "error",
            LoggingLevel::Fatal => "fatal",
        }
    }

    /// The closest `tracing` filter for this level.
    ///
    /// `tracing` has nothing above `ERROR`, so `fatal` shares it.
    pub const fn as_level_filter(self) -> LevelFilter {
        match self {
            LoggingLevel::Silent => LevelFilter::OFF,
            LoggingLevel::Trace => LevelFilter::TRACE,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Error | LoggingLevel::Fatal => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the level names.
impl FromStr for LoggingLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoggingLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}
