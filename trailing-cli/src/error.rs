//! Error handling for the CLI application

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-file errors; reported and skipped, never fatal to a run
#[derive(Error, Debug)]
pub enum CliError {
    /// File missing, unreadable or otherwise impossible to open
    #[error("Failed to open file: {}: {source}", .path.display())]
    FileOpen {
        /// The path as given on the command line
        path: PathBuf,
        /// Cause reported by the operating system
        #[source]
        source: io::Error,
    },

    /// Reading failed partway through a file
    #[error("Failed to read file: {}: {source}", .path.display())]
    FileRead {
        /// The path as given on the command line
        path: PathBuf,
        /// Cause, including the line being read
        #[source]
        source: trailing_core::ScanError,
    },
}

impl CliError {
    /// Path of the file the error belongs to
    pub fn path(&self) -> &Path {
        match self {
            CliError::FileOpen { path, .. } | CliError::FileRead { path, .. } => path.as_path(),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
