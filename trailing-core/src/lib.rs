//! Trailing character detection
//!
//! This crate finds lines that end with unwanted trailing characters and
//! renders them with the trailing run highlighted:
//!
//! - [`split_line`] separates a raw line into content and [`Terminator`]
//! - [`FlagRule`] decides which characters are unwanted
//! - [`detect`] finds the trailing run, [`highlight_line`] renders it
//! - [`Scanner`] applies all of the above to every line of a reader
//!
//! Everything works on bytes. Invalid UTF-8 is never rejected; it simply
//! never counts as a flagged character.
//!
//! ```
//! use std::io::Cursor;
//! use trailing_core::{FlagRule, Scanner};
//!
//! let rule = FlagRule::from_chars(";");
//! let findings: Vec<_> = Scanner::new(Cursor::new("a;\nb\nc;;\n"), &rule)
//!     .map(|finding| finding.map(|f| f.line_number))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(findings, vec![1, 3]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod highlight;
pub mod line;
pub mod rule;
pub mod scanner;

pub use error::{Result, ScanError};
pub use highlight::{detect, highlight_line, Markers, Trailing};
pub use line::{split_line, SplitLine, Terminator};
pub use rule::{CharSet, FlagRule};
pub use scanner::{Finding, Scanner};
