//! Typed, validated configuration values read from the environment.
//!
//! [`EnvironmentReader`] wraps a key-value [`Source`] (the live process
//! environment by default) and turns raw entries into strings, positive
//! integers, booleans, URLs, unprivileged ports and [`LoggingLevel`]s.
//! Callers may supply a fallback for absent values; anything present but
//! invalid is reported through a [`DiagnosticSink`] and returned as a
//! [`ConfigurationError`].
//!
//! ```
//! use std::collections::HashMap;
//! use env_reader::{EnvironmentReader, LoggingLevel};
//!
//! let source: HashMap<String, String> = [
//!     ("HTTPS_PORT".to_string(), "8444".to_string()),
//!     ("API_BASEURI".to_string(), "http://api.host:1234/path".to_string()),
//! ]
//! .into();
//! let env = EnvironmentReader::with_source(source);
//!
//! assert_eq!(env.get_unprivileged_port("HTTPS_PORT", None), Ok(8444));
//! assert_eq!(env.get_integer("RETRY_COUNT", Some(3)), Ok(3));
//! assert_eq!(env.get_url("API_BASEURI", None).as_deref(), Ok("http://api.host:1234/path"));
//! assert_eq!(
//!     env.get_logging_level("LOG_LEVEL", Some(LoggingLevel::Info)),
//!     Ok(LoggingLevel::Info)
//! );
//! assert!(env.get_string("DATABASE_URL", None).is_err());
//! ```

#![deny(missing_docs)]

pub mod diagnostics;
pub mod error;
pub mod level;
pub mod reader;
pub mod source;

pub use diagnostics::{Diagnostic, DiagnosticSink, LogOptions, Reason, TracingSink};
pub use error::ConfigurationError;
pub use level::LoggingLevel;
pub use reader::EnvironmentReader;
pub use source::{ProcessEnv, Source};
