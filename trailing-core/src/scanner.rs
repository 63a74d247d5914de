//! Line-by-line scanning of a byte source
//!
//! [`Scanner`] reads raw lines with their terminators, numbers them from 1
//! and yields a [`Finding`] for every line whose content ends with a flagged
//! character. Lines are read as bytes, so no encoding is assumed and there
//! is no line-length limit.

use crate::error::{Result, ScanError};
use crate::highlight::{detect, Markers, Trailing};
use crate::line::{split_line, Terminator};
use crate::rule::FlagRule;
use std::io::{self, BufRead, Write};

/// A flagged line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line number
    pub line_number: usize,
    content: Vec<u8>,
    stripped_len: usize,
    terminator: Terminator,
}

impl Finding {
    /// Content before the trailing run
    pub fn stripped(&self) -> &[u8] {
        &self.content[..self.stripped_len]
    }

    /// The flagged trailing run
    pub fn run(&self) -> &[u8] {
        &self.content[self.stripped_len..]
    }

    /// Terminator the line was read with
    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// Borrow as a [`Trailing`]
    pub fn trailing(&self) -> Trailing<'_> {
        Trailing {
            stripped: self.stripped(),
            run: self.run(),
        }
    }

    /// Write the highlighted line, original terminator included
    pub fn write_highlighted<W: Write>(&self, writer: &mut W, markers: &Markers) -> io::Result<()> {
        self.trailing()
            .write_highlighted(writer, markers, self.terminator)
    }

    /// The raw line exactly as it was read
    pub fn raw(&self) -> Vec<u8> {
        let mut raw = self.content.clone();
        raw.extend_from_slice(self.terminator.as_bytes());
        raw
    }
}

/// Iterator over the flagged lines of a reader
///
/// A read error is yielded once and ends the iteration.
pub struct Scanner<'r, R> {
    reader: R,
    rule: &'r FlagRule,
    buf: Vec<u8>,
    line_number: usize,
    finished: bool,
}

impl<'r, R: BufRead> Scanner<'r, R> {
    /// Scan `reader` with `rule`
    pub fn new(reader: R, rule: &'r FlagRule) -> Self {
        Self {
            reader,
            rule,
            buf: Vec::new(),
            line_number: 0,
            finished: false,
        }
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for Scanner<'_, R> {
    type Item = Result<Finding>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.finished = true,
                Ok(_) => {
                    self.line_number += 1;
                    let line = split_line(&self.buf);
                    if let Some(trailing) = detect(line.content, self.rule) {
                        return Some(Ok(Finding {
                            line_number: self.line_number,
                            content: line.content.to_vec(),
                            stripped_len: trailing.stripped.len(),
                            terminator: line.terminator,
                        }));
                    }
                }
                Err(source) => {
                    self.finished = true;
                    return Some(Err(ScanError::Io {
                        line: self.line_number + 1,
                        source,
                    }));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn scan(input: &[u8], rule: &FlagRule) -> Vec<Finding> {
        Scanner::new(Cursor::new(input), rule)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let findings = scan(b"clean\ndirty \nclean\n\t\n", &FlagRule::Whitespace);
        let numbers: Vec<_> = findings.iter().map(|f| f.line_number).collect();
        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let findings = scan(b"a\nb  ", &FlagRule::Whitespace);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line_number, 2);
        assert_eq!(findings[0].stripped(), b"b");
        assert_eq!(findings[0].run(), b"  ");
        assert_eq!(findings[0].terminator(), Terminator::None);
    }

    #[test]
    fn test_mixed_line_endings() {
        let findings = scan(b"a \r\nb\r\nc\t\n", &FlagRule::Whitespace);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].terminator(), Terminator::CrLf);
        assert_eq!(findings[0].run(), b" ");
        assert_eq!(findings[1].terminator(), Terminator::Lf);
        assert_eq!(findings[1].run(), b"\t");
    }

    #[test]
    fn test_crlf_file_is_clean() {
        assert!(scan(b"one\r\ntwo\r\n", &FlagRule::Whitespace).is_empty());
    }

    #[test]
    fn test_custom_rule() {
        let rule = FlagRule::from_chars(";");
        let findings = scan(b"foo;;\nbar \nbaz;\n", &rule);
        let numbers: Vec<_> = findings.iter().map(|f| f.line_number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_empty_input() {
        let rule = FlagRule::Whitespace;
        let mut scanner = Scanner::new(Cursor::new(b""), &rule);
        assert!(scanner.next().is_none());
        assert_eq!(scanner.lines_read(), 0);
    }

    #[test]
    fn test_lines_read_counts_clean_lines() {
        let rule = FlagRule::Whitespace;
        let mut scanner = Scanner::new(Cursor::new(b"a\nb\nc\n"), &rule);
        assert!(scanner.next().is_none());
        assert_eq!(scanner.lines_read(), 3);
    }

    #[test]
    fn test_non_utf8_bytes() {
        let findings = scan(b"\xff\xfe \n", &FlagRule::Whitespace);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].stripped(), b"\xff\xfe");
    }

    #[test]
    fn test_finding_raw_and_highlight() {
        let findings = scan(b"x  \r\n", &FlagRule::Whitespace);
        let finding = &findings[0];
        assert_eq!(finding.raw(), b"x  \r\n");

        let mut out = Vec::new();
        finding
            .write_highlighted(&mut out, &Markers::new("<", ">"))
            .unwrap();
        assert_eq!(out, b"x<  >\r\n");
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
            }
            self.served = true;
            let data = b"ok \n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_read_error_ends_iteration() {
        let rule = FlagRule::Whitespace;
        let reader = BufReader::new(FailingReader { served: false });
        let mut scanner = Scanner::new(reader, &rule);

        let first = scanner.next().unwrap().unwrap();
        assert_eq!(first.line_number, 1);

        match scanner.next() {
            Some(Err(ScanError::Io { line, .. })) => assert_eq!(line, 2),
            other => panic!("expected read error, got {other:?}"),
        }
        assert!(scanner.next().is_none());
    }

    struct InterruptedOnce {
        interrupted: bool,
        data: Cursor<&'static [u8]>,
    }

    impl Read for InterruptedOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let rule = FlagRule::Whitespace;
        let reader = BufReader::new(InterruptedOnce {
            interrupted: false,
            data: Cursor::new(&b"a\nb \n"[..]),
        });
        let findings: Vec<_> = Scanner::new(reader, &rule)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line_number, 2);
    }
}
