//! Error types for configuration resolution.
//!
//! Every loader returns `Result<T, ConfigError>`. Wrong-typed values inside the
//! `[slack]` table are not errors; they are treated as absent keys.

use std::path::PathBuf;
use thiserror::Error;

/// Flat classification of a [`ConfigError`] for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    InvalidDuration,
}

/// Why a configuration file could not be turned into settings.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// The file is not syntactically valid TOML.
    #[error("invalid TOML: {0}")]
    Syntax(#[from] toml::de::Error),

    /// A required table is absent or is not a table.
    #[error("missing [{0}] table")]
    MissingSection(&'static str),
}

/// Reasons a duration string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("expected a number at position {0}")]
    MissingNumber(usize),

    #[error("missing unit after {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    #[error("duration is out of range")]
    Overflow,

    #[error("negative durations are not supported")]
    Negative,

    #[error("value is not valid UTF-8")]
    NotUnicode,
}

/// Error returned by the configuration loaders.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse {}: {kind}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        kind: ParseErrorKind,
    },

    /// A duration value from the file or environment is malformed.
    #[error("incorrect value for interval from {origin}: {value:?}: {source}")]
    InvalidDuration {
        origin: String,
        value: String,
        #[source]
        source: DurationError,
    },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, kind: impl Into<ParseErrorKind>) -> Self {
        Self::Parse {
            path: path.into(),
            kind: kind.into(),
        }
    }

    pub fn invalid_duration(
        origin: impl Into<String>,
        value: impl Into<String>,
        source: DurationError,
    ) -> Self {
        Self::InvalidDuration {
            origin: origin.into(),
            value: value.into(),
            source,
        }
    }

    /// Classify this error without matching on its fields.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Io { .. } => ErrorKind::Io,
            ConfigError::Parse { .. } => ErrorKind::Parse,
            ConfigError::InvalidDuration { .. } => ErrorKind::InvalidDuration,
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
