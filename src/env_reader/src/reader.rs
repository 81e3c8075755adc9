//! The typed accessor layer.
//!
//! Each accessor builds on a lower one and adds a single constraint:
//!
//! - [`get_string`](EnvironmentReader::get_string): present and non-blank, or a fallback
//! - [`get_integer`](EnvironmentReader::get_integer): a string that parses as a positive integer
//! - [`get_unprivileged_port`](EnvironmentReader::get_unprivileged_port): `1025..=65535`
//! - [`get_url`](EnvironmentReader::get_url): a string that parses as an absolute URL
//! - [`get_logging_level`](EnvironmentReader::get_logging_level): names a [`LoggingLevel`]
//!
//! [`get_boolean`](EnvironmentReader::get_boolean) reads the raw value directly, so an
//! empty string is an invalid boolean rather than a missing one.

use url::Url;

use crate::{
    diagnostics::{
        DEFAULT_LAYER, Diagnostic, DiagnosticSink, FAILURE_MESSAGE, LogOptions, Reason,
        TracingSink,
    },
    error::ConfigurationError,
    level::LoggingLevel,
    source::{ProcessEnv, Source},
};

/// Source entry that sets the default sink's verbosity.
pub const LOGGING_LEVEL_KEY: &str = "LOGGING_LEVEL";

/// Reads and validates configuration values from a [`Source`].
///
/// The reader never mutates its source and holds no per-call state, so
/// repeated calls with the same key give the same answer.
pub struct EnvironmentReader<S = ProcessEnv> {
    source: S,
    sink: Box<dyn DiagnosticSink>,
}

impl EnvironmentReader<ProcessEnv> {
    /// Reader over the live process environment with default log options.
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }
}

impl Default for EnvironmentReader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Source> EnvironmentReader<S> {
    /// Reader over `source` with default log options.
    pub fn with_source(source: S) -> Self {
        Self::with_options(source, LogOptions::default())
    }

    /// Reader over `source` reporting through a [`TracingSink`] built from `options`.
    ///
    /// When `options.level` is unset the source's `LOGGING_LEVEL` entry is
    /// used if it names a level, otherwise `silent`.
    pub fn with_options(source: S, options: LogOptions) -> Self {
        let level = options
            .level
            .unwrap_or_else(|| level_from_source(&source));
        let layer = options.layer.unwrap_or_else(|| DEFAULT_LAYER.to_string());
        Self::with_sink(source, TracingSink::new(layer, level))
    }

    /// Reader over `source` reporting through a caller-supplied sink.
    pub fn with_sink(source: S, sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            source,
            sink: Box::new(sink),
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The raw value for `key`, if any. Never fails.
    pub fn get_optional_string(&self, key: &str) -> Option<String> {
        self.source.get(key)
    }

    /// A value that is non-blank after trimming.
    ///
    /// The value is returned untrimmed. An absent, empty or whitespace-only
    /// value yields `fallback` when it is itself non-blank. A whitespace-only
    /// fallback such as `Some(" ")` is not returned as given: it counts as no
    /// fallback and the call fails.
    pub fn get_string(
        &self,
        key: &str,
        fallback: Option<&str>,
    ) -> Result<String, ConfigurationError> {
        if let Some(value) = self.get_optional_string(key) {
            if !value.trim().is_empty() {
                return Ok(value);
            }
        }
        match fallback.filter(|f| !f.trim().is_empty()) {
            Some(f) => Ok(f.to_string()),
            None => Err(self.reject(key, None, Reason::Missing)),
        }
    }

    /// A strictly positive integer.
    ///
    /// The fallback is rendered as a string and goes through [`get_string`](Self::get_string)
    /// like any other value, so `Some(0)` is accepted as a fallback and then
    /// rejected as non-positive. Every `u64` is accepted; larger values are
    /// invalid integers.
    pub fn get_integer(
        &self,
        key: &str,
        fallback: Option<u64>,
    ) -> Result<u64, ConfigurationError> {
        let fallback = fallback.map(|n| n.to_string());
        let value = self.get_string(key, fallback.as_deref())?;

        // i128 holds every u64 as well as its negation
        match value.trim().parse::<i128>() {
            Ok(n) if n <= 0 => Err(self.reject(key, Some(&value), Reason::NonPositiveInteger)),
            Ok(n) => u64::try_from(n)
                .map_err(|_| self.reject(key, Some(&value), Reason::InvalidInteger)),
            Err(_) => Err(self.reject(key, Some(&value), Reason::InvalidInteger)),
        }
    }

    /// `true` or `false`, compared case-insensitively.
    ///
    /// Only an absent key falls back; an empty value is invalid.
    pub fn get_boolean(
        &self,
        key: &str,
        fallback: Option<bool>,
    ) -> Result<bool, ConfigurationError> {
        let Some(value) = self.get_optional_string(key) else {
            return fallback.ok_or_else(|| self.reject(key, None, Reason::Missing));
        };

        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(self.reject(key, Some(&value), Reason::InvalidBoolean))
        }
    }

    /// A TCP/UDP port strictly between 1024 and 65536.
    pub fn get_unprivileged_port(
        &self,
        key: &str,
        fallback: Option<u16>,
    ) -> Result<u16, ConfigurationError> {
        let port = self.get_integer(key, fallback.map(u64::from))?;

        match u16::try_from(port) {
            Ok(p) if p > 1024 => Ok(p),
            _ => Err(self.reject(key, Some(&port.to_string()), Reason::PortOutOfRange)),
        }
    }

    /// A string that parses as an absolute URL. The original string is returned.
    pub fn get_url(
        &self,
        key: &str,
        fallback: Option<&str>,
    ) -> Result<String, ConfigurationError> {
        let value = self.get_string(key, fallback)?;

        if Url::parse(&value).is_err() {
            return Err(self.reject(key, Some(&value), Reason::InvalidUrl));
        }
        Ok(value)
    }

    /// One of the seven logging level names, matched case-sensitively.
    pub fn get_logging_level(
        &self,
        key: &str,
        fallback: Option<LoggingLevel>,
    ) -> Result<LoggingLevel, ConfigurationError> {
        let value = self.get_string(key, fallback.map(LoggingLevel::as_str))?;

        value
            .parse()
            .map_err(|_| self.reject(key, Some(&value), Reason::UnsupportedLoggingLevel))
    }

    fn reject(&self, key: &str, value: Option<&str>, reason: Reason) -> ConfigurationError {
        self.sink
            .record_fatal(&Diagnostic { key, value, reason }, FAILURE_MESSAGE);
        ConfigurationError
    }
}

/// Lenient read of `LOGGING_LEVEL` for the reader's own sink.
fn level_from_source<S: Source>(source: &S) -> LoggingLevel {
    source
        .get(LOGGING_LEVEL_KEY)
        .and_then(|raw| raw.trim().to_ascii_lowercase().parse().ok())
        .unwrap_or_default()
}
