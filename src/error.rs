//! Error types for kernel stat extraction.
//!
//! The defaulting reader API never surfaces these; they back the `try_`
//! forms so callers can distinguish "really zero" from "unreadable".

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for reads against the process-information root.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The kernel file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file was readable but the key never appeared.
    #[error("key '{key}' not found in {path}")]
    KeyNotFound {
        /// The key that was searched for.
        key: String,
        /// The file that was scanned.
        path: PathBuf,
    },

    /// A field was present but did not parse as the expected type.
    #[error("malformed value for '{what}' in {path}")]
    Malformed {
        /// Which field failed to convert.
        what: String,
        /// The file the field came from.
        path: PathBuf,
    },
}

/// Result type alias for reader operations.
pub type Result<T> = std::result::Result<T, ReadError>;
