//! File opening utilities

use crate::error::CliError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens files for line scanning
pub struct FileReader;

impl FileReader {
    /// Open a file for buffered, read-only access.
    ///
    /// The handle lives as long as the returned reader; dropping it closes
    /// the file.
    pub fn open(path: &Path) -> Result<BufReader<File>, CliError> {
        let file = File::open(path).map_err(|source| CliError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        log::trace!("Opened {}", path.display());

        Ok(BufReader::new(file))
    }
}
