//! Core error types
//!
//! Splitting and detection never fail; only reading from a source can.

use std::io;
use thiserror::Error;

/// Errors raised while scanning a line source
#[derive(Error, Debug)]
pub enum ScanError {
    /// The underlying reader failed
    #[error("read failed at line {line}: {source}")]
    Io {
        /// 1-based number of the line being read when the error occurred
        line: usize,
        /// The I/O error reported by the reader
        #[source]
        source: io::Error,
    },
}

/// Result type for scanning operations
pub type Result<T> = std::result::Result<T, ScanError>;
