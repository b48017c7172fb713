//! Shared error types for the configuration and I/O layers.
//!
//! Analysis itself is total and never returns an error; everything here
//! comes from loading configuration, reading input, or writing reports.

use crate::config::ConfigIssue;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for aspectlens operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system errors with the offending path
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration that is not valid TOML or does not fit the schema
    #[error("Failed to parse configuration{}: {message}", location(.path))]
    ConfigParse {
        path: Option<PathBuf>,
        message: String,
    },

    /// Configuration that parsed but failed validation
    #[error("Invalid configuration: {}", summarize_issues(.0))]
    InvalidConfig(Vec<ConfigIssue>),

    /// Word-boundary pattern errors
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error, optionally tied to a file
    pub fn config_parse(path: Option<&Path>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.map(Path::to_path_buf),
            message: message.into(),
        }
    }

    /// Validation issues carried by this error, if any
    pub fn issues(&self) -> &[ConfigIssue] {
        match self {
            Self::InvalidConfig(issues) => issues,
            _ => &[],
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

fn summarize_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
