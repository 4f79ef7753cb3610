//! Error types for building and loading navigation configuration.

use std::path::PathBuf;

/// A required field is missing or empty, or a link is malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// Field path of the offending entry (e.g., "`sidebar[1].items[0].link`").
    pub field: String,
    /// Human-readable reason.
    pub reason: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// A social link uses an icon the renderer does not know.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: unknown icon \"{icon}\"")]
pub struct UnknownIconError {
    /// Field path of the offending entry (e.g., "`socialLinks[0].icon`").
    pub field: String,
    /// The unrecognized icon identifier.
    pub icon: String,
}

/// Error returned by [`build`](crate::build).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    UnknownIcon(#[from] UnknownIconError),
}

impl BuildError {
    /// Field path of the entry that failed.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Validation(e) => &e.field,
            Self::UnknownIcon(e) => &e.field,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Parse error in the declaration file.
    #[error("{format} parse error: {message}")]
    Parse {
        /// Format name ("TOML", "YAML" or "JSON").
        format: &'static str,
        /// Parser message.
        message: String,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Field path (e.g., "`socialLinks[0].link`").
        field: String,
        /// Error message (e.g., "${`GITHUB_URL`} not set").
        message: String,
    },
    /// The declaration failed validation.
    #[error("Invalid site configuration: {0}")]
    Build(#[from] BuildError),
}
