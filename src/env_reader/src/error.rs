//! The error type returned by every validating accessor.

use thiserror::Error;

/// A configuration value was missing or failed validation.
///
/// Carries no payload: the offending key, value and reason are reported
/// through the reader's [`DiagnosticSink`](crate::diagnostics::DiagnosticSink)
/// before this error is returned. Callers are expected to treat it as fatal
/// to startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid configuration value")]
pub struct ConfigurationError;
