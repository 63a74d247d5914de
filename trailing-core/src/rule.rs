//! Flag rules
//!
//! A [`FlagRule`] decides which characters count as unwanted when they
//! appear at the end of a line. It is built once per run and passed by
//! reference to every detection call.

use std::collections::BTreeSet;
use std::fmt;

/// Predicate selecting the trailing characters to report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlagRule {
    /// Any Unicode whitespace character
    #[default]
    Whitespace,
    /// Any character in an explicit set, built with [`FlagRule::from_chars`]
    Chars(CharSet),
}

/// Non-empty set of flagged characters
///
/// Only [`FlagRule::from_chars`] creates one, so a `Chars` rule always
/// flags at least one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet(BTreeSet<char>);

impl CharSet {
    /// Whether `c` is in the set
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FlagRule {
    /// Build a rule from a user-supplied character string.
    ///
    /// An empty string selects [`FlagRule::Whitespace`]. Otherwise every
    /// character of `chars` is a member of the set; order and duplicates
    /// are irrelevant.
    pub fn from_chars(chars: &str) -> Self {
        if chars.is_empty() {
            FlagRule::Whitespace
        } else {
            FlagRule::Chars(CharSet(chars.chars().collect()))
        }
    }

    /// Whether `c` is flagged by this rule
    pub fn matches(&self, c: char) -> bool {
        match self {
            FlagRule::Whitespace => c.is_whitespace(),
            FlagRule::Chars(set) => set.contains(c),
        }
    }

    /// Strip flagged characters from the right end of `content`.
    ///
    /// Trimming stops at the first character from the right that is not
    /// flagged, or at a byte sequence that does not decode as UTF-8.
    /// Flagged characters earlier in the line are left alone.
    pub fn trim_end<'a>(&self, content: &'a [u8]) -> &'a [u8] {
        let mut end = content.len();
        while let Some((c, width)) = last_char(&content[..end]) {
            if !self.matches(c) {
                break;
            }
            end -= width;
        }
        &content[..end]
    }
}

impl fmt::Display for FlagRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagRule::Whitespace => write!(f, "whitespace"),
            FlagRule::Chars(set) => {
                write!(f, "chars ")?;
                let chars: String = set.iter().collect();
                write!(f, "{chars:?}")
            }
        }
    }
}

/// Decode the last UTF-8 scalar value of `bytes`.
///
/// Returns the character and its encoded width, or `None` if `bytes` is
/// empty or does not end with a complete, valid UTF-8 sequence.
fn last_char(bytes: &[u8]) -> Option<(char, usize)> {
    // The shortest valid suffix is exactly one character.
    for width in 1..=bytes.len().min(4) {
        let tail = &bytes[bytes.len() - width..];
        if let Ok(s) = std::str::from_utf8(tail) {
            return s.chars().next_back().map(|c| (c, width));
        }
    }
    None
}
