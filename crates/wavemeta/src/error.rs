//! Error types for WAVE metadata scanning.

use thiserror::Error;

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while scanning a RIFF/WAVE container.
///
/// Every variant aborts the whole parse: callers get either a fully
/// populated metadata view or an error, never a partial one.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The container is not a RIFF/WAVE file, or a parsed field makes
    /// further derivation impossible.
    #[error("not a valid WAVE file: {message}")]
    Format {
        /// What was wrong with the container.
        message: String,
    },

    /// A declared or implied field extends past end-of-file.
    #[error("truncated WAVE file: unexpected end of data at offset {offset}")]
    Truncated {
        /// File offset at which the scan ran out of bytes.
        offset: u64,
    },

    /// A chunk appeared before another chunk it depends on.
    #[error("chunk ordering violation: {message}")]
    ChunkOrder {
        /// Which ordering constraint was violated.
        message: String,
    },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Creates a chunk-ordering error.
    pub fn chunk_order(message: impl Into<String>) -> Self {
        Self::ChunkOrder {
            message: message.into(),
        }
    }
}
