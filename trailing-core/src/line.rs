//! Line splitting
//!
//! Separates a raw line, as read from its source with the terminator still
//! attached, into its content and the terminator that ended it.

/// Line terminator detected at the end of a raw line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminator {
    /// No terminator (last line of a file without a final newline)
    #[default]
    None,
    /// `"\n"`
    Lf,
    /// `"\r\n"`
    CrLf,
}

impl Terminator {
    /// Bytes of the terminator as they appeared in the input
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Terminator::None => b"",
            Terminator::Lf => b"\n",
            Terminator::CrLf => b"\r\n",
        }
    }

    /// Length of the terminator in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether this is [`Terminator::None`]
    pub fn is_empty(&self) -> bool {
        matches!(self, Terminator::None)
    }
}

/// A raw line split into content and terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLine<'a> {
    /// The line without its terminator
    pub content: &'a [u8],
    /// The terminator that ended the line
    pub terminator: Terminator,
}

/// Split a raw line into content and terminator.
///
/// The CRLF suffix is checked before the LF suffix. `"\r\n"` also ends with
/// `"\n"`, so checking LF first would classify CRLF lines as LF and leave a
/// stray `\r` at the end of the content. A `\r` that is not followed by `\n`
/// is ordinary content.
///
/// Any byte sequence is accepted, including the empty one.
///
/// ```
/// use trailing_core::{split_line, Terminator};
///
/// let line = split_line(b"foo\r\n");
/// assert_eq!(line.content, b"foo");
/// assert_eq!(line.terminator, Terminator::CrLf);
/// ```
pub fn split_line(raw: &[u8]) -> SplitLine<'_> {
    let terminator = if raw.ends_with(b"\r\n") {
        Terminator::CrLf
    } else if raw.ends_with(b"\n") {
        Terminator::Lf
    } else {
        Terminator::None
    };

    SplitLine {
        content: &raw[..raw.len() - terminator.len()],
        terminator,
    }
}
