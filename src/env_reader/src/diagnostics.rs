//! Failure reporting for the reader.
//!
//! Every rejected value is handed to a [`DiagnosticSink`] exactly once, at
//! fatal severity, before the accessor returns
//! [`ConfigurationError`](crate::ConfigurationError). The default sink is
//! [`TracingSink`], which forwards to whatever `tracing` subscriber the
//! process installed. Nothing is reported on success.

use std::{fmt, sync::Arc};

use crate::level::LoggingLevel;

/// Layer name used when [`LogOptions::layer`] is not set.
pub const DEFAULT_LAYER: &str = "config-env";

/// Message attached to every failure diagnostic.
pub const FAILURE_MESSAGE: &str = "invalid configuration value";

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Absent, empty or whitespace-only with no usable fallback.
    Missing,
    /// Not a base-10 integer.
    InvalidInteger,
    /// Parsed, but zero or negative.
    NonPositiveInteger,
    /// Neither `true` nor `false`.
    InvalidBoolean,
    /// Outside `1025..=65535`.
    PortOutOfRange,
    /// Not an absolute URL.
    InvalidUrl,
    /// Not one of the seven logging level names.
    UnsupportedLoggingLevel,
}

impl Reason {
    /// Short reason code included in the diagnostic.
    pub const fn as_str(self) -> &'static str {
        match self {
            Reason::Missing => "value is missing, empty or blank",
            Reason::InvalidInteger => "invalid integer",
            Reason::NonPositiveInteger => "non-positive integer",
            Reason::InvalidBoolean => "invalid boolean value",
            Reason::PortOutOfRange => "port number out of valid range",
            Reason::InvalidUrl => "invalid URL format",
            Reason::UnsupportedLoggingLevel => "unsupported logging level",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured context for one rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    /// The configuration key that was looked up.
    pub key: &'a str,
    /// The offending value, when one was available.
    pub value: Option<&'a str>,
    /// Why it was rejected.
    pub reason: Reason,
}

/// Receives fatal diagnostics from an
/// [`EnvironmentReader`](crate::EnvironmentReader).
pub trait DiagnosticSink: Send + Sync {
    /// Record a failure. Must not panic; the reader returns its error regardless.
    fn record_fatal(&self, diagnostic: &Diagnostic<'_>, message: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn record_fatal(&self, diagnostic: &Diagnostic<'_>, message: &str) {
        (**self).record_fatal(diagnostic, message);
    }
}

/// Logging configuration for the default sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Layer name attached to every event. Defaults to [`DEFAULT_LAYER`].
    pub layer: Option<String>,
    /// Minimum severity. Defaults to the source's `LOGGING_LEVEL`, else `silent`.
    pub level: Option<LoggingLevel>,
}

/// Emits diagnostics as `tracing` events at `ERROR`.
///
/// A `silent` sink drops everything; any other level lets fatal events
/// through since nothing ranks above them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSink {
    layer: String,
    level: LoggingLevel,
}

impl TracingSink {
    /// Create a sink for `layer` with the given minimum severity.
    pub fn new(layer: impl Into<String>, level: LoggingLevel) -> Self {
        Self {
            layer: layer.into(),
            level,
        }
    }

    /// Layer name attached to emitted events.
    pub fn layer(&self) -> &str {
        &self.layer
    }

    /// Minimum severity this sink reports.
    pub const fn level(&self) -> LoggingLevel {
        self.level
    }

    fn enabled(&self) -> bool {
        self.level != LoggingLevel::Silent
    }
}

impl DiagnosticSink for TracingSink {
    fn record_fatal(&self, diagnostic: &Diagnostic<'_>, message: &str) {
        if !self.enabled() {
            return;
        }
        match diagnostic.value {
            Some(value) => tracing::error!(
                layer = %self.layer,
                severity = "fatal",
                key = diagnostic.key,
                value,
                reason = %diagnostic.reason,
                "{message}"
            ),
            None => tracing::error!(
                layer = %self.layer,
                severity = "fatal",
                key = diagnostic.key,
                reason = %diagnostic.reason,
                "{message}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_codes() {
        assert_eq!(Reason::Missing.to_string(), "value is missing, empty or blank");
        assert_eq!(Reason::PortOutOfRange.as_str(), "port number out of valid range");
        assert_eq!(Reason::UnsupportedLoggingLevel.as_str(), "unsupported logging level");
    }

    #[test]
    fn silent_sink_is_disabled() {
        assert!(!TracingSink::new(DEFAULT_LAYER, LoggingLevel::Silent).enabled());
        for level in &LoggingLevel::ALL[1..] {
            assert!(TracingSink::new(DEFAULT_LAYER, *level).enabled(), "{level}");
        }
    }
}
