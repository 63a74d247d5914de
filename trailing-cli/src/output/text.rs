//! Plain text report
//!
//! Each flagged line is written as a `<filename>:<line>` header, the
//! highlighted line, then a blank line.

use crate::error::CliResult;
use std::io::Write;
use std::path::Path;
use trailing_core::{Finding, Markers};

/// Writes findings in the plain text report format
pub struct TextReporter<W: Write> {
    writer: W,
    markers: Markers,
    reported: usize,
}

impl<W: Write> TextReporter<W> {
    /// Create a reporter with the given highlight markers
    pub fn new(writer: W, markers: Markers) -> Self {
        Self {
            writer,
            markers,
            reported: 0,
        }
    }

    /// Report one flagged line of `path`
    pub fn report(&mut self, path: &Path, finding: &Finding) -> CliResult<()> {
        writeln!(self.writer, "{}:{}", path.display(), finding.line_number)?;
        finding.write_highlighted(&mut self.writer, &self.markers)?;
        if finding.terminator().is_empty() {
            self.writer.write_all(b"\n")?;
        }
        self.writer.write_all(b"\n")?;
        self.reported += 1;
        Ok(())
    }

    /// Number of findings reported so far
    pub fn reported(&self) -> usize {
        self.reported
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> CliResult<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
