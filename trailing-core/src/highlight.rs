//! Trailing run detection and highlighting

use crate::line::{split_line, Terminator};
use crate::rule::FlagRule;
use std::io::{self, Write};

/// ANSI red background
pub const ANSI_RED_BACKGROUND: &[u8] = b"\x1b[41m";

/// ANSI attribute reset
pub const ANSI_RESET: &[u8] = b"\x1b[0m";

/// Byte sequences written around a trailing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Written before the trailing run
    pub start: Vec<u8>,
    /// Written after the trailing run
    pub end: Vec<u8>,
}

impl Markers {
    /// Create markers from arbitrary byte sequences
    pub fn new(start: impl Into<Vec<u8>>, end: impl Into<Vec<u8>>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Red background, then reset
    pub fn ansi() -> Self {
        Self::new(ANSI_RED_BACKGROUND, ANSI_RESET)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::ansi()
    }
}

/// Content split at the start of its trailing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trailing<'a> {
    /// Content with the trailing run removed
    pub stripped: &'a [u8],
    /// The flagged suffix, never empty
    pub run: &'a [u8],
}

/// Find the trailing run of `content` under `rule`.
///
/// Returns `None` when the content does not end with a flagged character,
/// which includes empty content. When every character is flagged,
/// `stripped` is empty and `run` is the whole content.
pub fn detect<'a>(content: &'a [u8], rule: &FlagRule) -> Option<Trailing<'a>> {
    let stripped = rule.trim_end(content);
    if stripped.len() == content.len() {
        return None;
    }

    Some(Trailing {
        stripped,
        run: &content[stripped.len()..],
    })
}

impl Trailing<'_> {
    /// Write `stripped`, the bracketed run, then `terminator`
    pub fn write_highlighted<W: Write>(
        &self,
        writer: &mut W,
        markers: &Markers,
        terminator: Terminator,
    ) -> io::Result<()> {
        writer.write_all(self.stripped)?;
        writer.write_all(&markers.start)?;
        writer.write_all(self.run)?;
        writer.write_all(&markers.end)?;
        writer.write_all(terminator.as_bytes())
    }

    /// Render into a new buffer
    pub fn render(&self, markers: &Markers, terminator: Terminator) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            self.stripped.len()
                + self.run.len()
                + markers.start.len()
                + markers.end.len()
                + terminator.len(),
        );
        out.extend_from_slice(self.stripped);
        out.extend_from_slice(&markers.start);
        out.extend_from_slice(self.run);
        out.extend_from_slice(&markers.end);
        out.extend_from_slice(terminator.as_bytes());
        out
    }
}

/// Split, detect and render a raw line in one step.
///
/// Returns `None` when the line has nothing to report. The original
/// terminator is reattached after the end marker.
///
/// ```
/// use trailing_core::{highlight_line, FlagRule, Markers};
///
/// let markers = Markers::new("[", "]");
/// let out = highlight_line(b"foo  \r\n", &FlagRule::Whitespace, &markers);
/// assert_eq!(out.as_deref(), Some(&b"foo[  ]\r\n"[..]));
/// ```
pub fn highlight_line(raw: &[u8], rule: &FlagRule, markers: &Markers) -> Option<Vec<u8>> {
    let line = split_line(raw);
    detect(line.content, rule).map(|trailing| trailing.render(markers, line.terminator))
}
