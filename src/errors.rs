//! Shared error types for lcovgate.
//!
//! Only conditions that stop a run are errors. Malformed LCOV lines and a
//! broken config file are recovered where they occur, and threshold
//! violations are reported through [`crate::thresholds::ThresholdReport`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lcovgate operations
#[derive(Debug, Error)]
pub enum Error {
    /// The collector program could not be located on `PATH`
    #[error("Coverage collector `{program}` not found: {source}")]
    CollectorNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// The collector program was found but could not be started
    #[error("Failed to start coverage collector `{program}`: {source}")]
    CollectorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The collector ran but exited unsuccessfully
    #[error("Coverage collector `{command}` exited with {status}")]
    CollectorFailed { command: String, status: String },

    /// The collector succeeded but printed nothing to parse
    #[error("Coverage collector `{command}` produced no output")]
    EmptyCoverage { command: String },

    /// The configured collector command line is blank
    #[error("Configuration error: collector command is empty")]
    EmptyCollectorCommand,

    /// File system errors with path context
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from obtaining coverage data from the collector
    pub fn is_collection_failure(&self) -> bool {
        matches!(
            self,
            Self::CollectorNotFound { .. }
                | Self::CollectorSpawn { .. }
                | Self::CollectorFailed { .. }
                | Self::EmptyCoverage { .. }
        )
    }
}

/// Convenience result type for lcovgate library code
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_includes_path() {
        let error = Error::io(
            "coverage/lcov.info",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(
            error.to_string(),
            "Failed to read coverage/lcov.info: missing"
        );
    }

    #[test]
    fn collector_failed_formats_command_and_status() {
        let error = Error::CollectorFailed {
            command: "deno coverage --lcov".to_string(),
            status: "exit status: 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Coverage collector `deno coverage --lcov` exited with exit status: 1"
        );
        assert!(error.is_collection_failure());
    }

    #[test]
    fn io_error_is_not_a_collection_failure() {
        let error = Error::io("lcov.info", io::Error::other("boom"));
        assert!(!error.is_collection_failure());
    }
}
