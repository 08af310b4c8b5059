//! # Error Types
//!
//! All fallible library operations return [`Result`], whose error side is
//! [`LoggerError`]. The variants fall into two groups:
//!
//! - **Configuration mistakes** (`DuplicateLevel`, `UndefinedLevel`,
//!   `Formatting`, `InvalidLevels`) that the caller is expected to fix.
//! - **Sink failures** (`FileAlreadyExists`, `Io`, `Console`) raised while
//!   emitting a line.
//!
//! Errors raised inside the call-logging wrappers are caught and reported
//! on standard error instead of being returned, see [`crate::decorate`].

use std::path::PathBuf;
use thiserror::Error;

use crate::color::UnknownColor;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors produced by the level registry, the formatter and the sinks.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// A level with this name is already registered
    #[error("Level name {name} already exists")]
    DuplicateLevel { name: String },

    /// No level with this name is registered
    #[error("Level {name} is undefined")]
    UndefinedLevel { name: String },

    /// The level's color or background color could not be resolved
    #[error("Color: {color}, or background color: {} is undefined", .background.as_deref().unwrap_or("None"))]
    Formatting {
        color: String,
        background: Option<String>,
        #[source]
        source: UnknownColor,
    },

    /// The logger requires a fresh file but the target already exists
    #[error("File {} already exists", .path.display())]
    FileAlreadyExists { path: PathBuf },

    /// Opening or writing a log file failed
    #[error("Failed to write log file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the console writer failed
    #[error("Failed to write to console: {0}")]
    Console(#[source] std::io::Error),

    /// A level catalog could not be parsed
    #[error("Invalid level definitions in {}: {source}", .path.display())]
    InvalidLevels {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoggerError {
    /// Create a duplicate level error
    pub fn duplicate_level(name: impl Into<String>) -> Self {
        Self::DuplicateLevel { name: name.into() }
    }

    /// Create an undefined level error
    pub fn undefined_level(name: impl Into<String>) -> Self {
        Self::UndefinedLevel { name: name.into() }
    }

    /// Create a file I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LoggerError::duplicate_level("MSG").to_string(),
            "Level name MSG already exists"
        );
        assert_eq!(
            LoggerError::undefined_level("NOPE").to_string(),
            "Level NOPE is undefined"
        );
        assert_eq!(
            LoggerError::FileAlreadyExists {
                path: PathBuf::from("out.log")
            }
            .to_string(),
            "File out.log already exists"
        );
    }

    #[test]
    fn test_formatting_error_message() {
        let err = LoggerError::Formatting {
            color: "mauve".to_string(),
            background: None,
            source: UnknownColor::new("mauve"),
        };
        assert_eq!(
            err.to_string(),
            "Color: mauve, or background color: None is undefined"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
