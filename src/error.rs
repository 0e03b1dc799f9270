//! Error types for foyer.
//!
//! The site's in-memory state transitions are total functions and return
//! plain values. Errors only arise at the edges: the persisted key-value
//! store and the terminal lifecycle. [`SiteError`] covers both, and
//! [`SiteResult`] is the common alias.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the fallible edges of the application.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The persisted state file could not be read or written.
    #[error("failed to access site state at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted state file could not be serialized.
    #[error("failed to encode site state: {0}")]
    Encode(#[from] serde_json::Error),

    /// No home directory could be determined for the state file.
    #[error("cannot determine a home directory for site state")]
    NoHomeDirectory,

    /// A terminal setup or teardown command failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display_includes_path() {
        let err = SiteError::Storage {
            path: PathBuf::from("/tmp/state.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/state.json"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_io_error_converts_to_terminal() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "tty");
        let err: SiteError = io_err.into();
        assert!(matches!(err, SiteError::Terminal(_)));
    }
}
