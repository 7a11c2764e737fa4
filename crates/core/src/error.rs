//! Error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the library crates.
pub type Result<T> = core::result::Result<T, Error>;

/// Library-level error.
///
/// Everything in the demo units is total except writing files, rendering
/// JSON and reading configuration, so those are the only failures modeled.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened, written or flushed.
    #[error("error writing to file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be rendered as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path_and_cause() {
        let err = Error::io(
            "/nowhere/demo.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/demo.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error as _;

        let err = Error::io(
            "x",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.source().is_some());
    }
}
