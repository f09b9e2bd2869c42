//! Code point sources and the lookahead queue.
//!
//! The scanner never touches raw input directly. It pulls code points
//! through [`Lookahead`], which sits on top of any [`CharSource`]:
//!
//! ```text
//! CharSource ──next_char──▶ Lookahead ──read/peek(n)──▶ Scanner
//!                              │
//!                              └── queue of peeked, unconsumed code points
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::error::Result;

/// A stream of decoded Unicode code points.
///
/// `Ok(None)` marks end of input. Once returned, every later call must
/// return `Ok(None)` as well. Any other failure is reported as
/// [`ScanError::Io`](crate::ScanError::Io) and is not retried.
pub trait CharSource {
    /// Pulls the next code point.
    fn next_char(&mut self) -> Result<Option<char>>;
}

/// A source over an in-memory string.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
    /// Creates a source over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
        }
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// A source that decodes UTF-8 from a buffered reader, one code point at
/// a time.
///
/// Malformed UTF-8 is reported as an [`io::ErrorKind::InvalidData`] fault.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    exhausted: bool,
}

impl<R: BufRead> ReaderSource<R> {
    /// Creates a source that reads from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            exhausted: false,
        }
    }

    /// Reads a single byte, or `None` at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if byte.is_some() {
                self.reader.consume(1);
            }
            return Ok(byte);
        }
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Result<Option<char>> {
        if self.exhausted {
            return Ok(None);
        }

        let Some(lead) = self.read_byte()? else {
            self.exhausted = true;
            return Ok(None);
        };

        let width = utf8_width(lead).ok_or_else(|| invalid_utf8("invalid leading byte"))?;
        let mut bytes = [lead, 0, 0, 0];
        for slot in &mut bytes[1..width] {
            *slot = self
                .read_byte()?
                .ok_or_else(|| invalid_utf8("truncated code point"))?;
        }

        let decoded = std::str::from_utf8(&bytes[..width])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(decoded.chars().next())
    }
}

/// Returns the encoded length of a UTF-8 sequence from its leading byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8(reason: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("stream did not contain valid UTF-8: {reason}"),
    )
}

/// A lookahead queue over a [`CharSource`].
///
/// `read` drains the queue before pulling fresh input, so peeks and reads
/// can be interleaved freely and every code point comes out of the source
/// exactly once.
#[derive(Debug)]
pub struct Lookahead<S> {
    source: S,
    queue: VecDeque<Option<char>>,
}

impl<S: CharSource> Lookahead<S> {
    /// Wraps `source` with an empty queue.
    pub fn new(source: S) -> Self {
        Self {
            source,
            queue: VecDeque::new(),
        }
    }

    /// Consumes the next code point.
    pub fn read(&mut self) -> Result<Option<char>> {
        match self.queue.pop_front() {
            Some(ch) => Ok(ch),
            None => self.source.next_char(),
        }
    }

    /// Returns the code point `n` reads ahead without consuming it.
    /// `peek(1)` is what the next `read` returns.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn peek(&mut self, n: usize) -> Result<Option<char>> {
        assert!(n >= 1, "peek depth starts at 1");

        while self.queue.len() < n {
            let ch = self.source.next_char()?;
            self.queue.push_back(ch);
        }
        Ok(self.queue[n - 1])
    }

    /// Number of code points peeked but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Counts how many times the source is pulled.
    struct Counting<'a> {
        inner: StrSource<'a>,
        pulls: usize,
    }

    impl CharSource for Counting<'_> {
        fn next_char(&mut self) -> Result<Option<char>> {
            self.pulls += 1;
            self.inner.next_char()
        }
    }

    /// Fails on the first pull.
    struct Broken;

    impl CharSource for Broken {
        fn next_char(&mut self) -> Result<Option<char>> {
            Err(io::Error::other("device unplugged").into())
        }
    }

    fn drain(source: &mut impl CharSource) -> String {
        let mut out = String::new();
        while let Some(ch) = source.next_char().unwrap() {
            out.push(ch);
        }
        out
    }

    #[test]
    fn test_str_source_eof_is_idempotent() {
        let mut source = StrSource::new("a");
        assert_eq!(source.next_char().unwrap(), Some('a'));
        assert_eq!(source.next_char().unwrap(), None);
        assert_eq!(source.next_char().unwrap(), None);
    }

    #[test]
    fn test_reader_source_decodes_multibyte() {
        let text = "a\u{e9}\u{2028}\u{1F600}z";
        let mut source = ReaderSource::new(Cursor::new(text.as_bytes()));
        assert_eq!(drain(&mut source), text);
        assert_eq!(source.next_char().unwrap(), None);
    }

    #[test]
    fn test_reader_source_rejects_invalid_utf8() {
        let mut source = ReaderSource::new(Cursor::new(vec![b'a', 0xFF]));
        assert_eq!(source.next_char().unwrap(), Some('a'));
        let err = source.next_char().unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_reader_source_rejects_truncated_sequence() {
        let mut source = ReaderSource::new(Cursor::new(vec![0xE2, 0x80]));
        assert!(source.next_char().is_err());
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut input = Lookahead::new(StrSource::new("abc"));
        assert_eq!(input.peek(2).unwrap(), Some('b'));
        assert_eq!(input.peek(2).unwrap(), Some('b'));
        assert_eq!(input.peek(1).unwrap(), Some('a'));
        assert_eq!(input.buffered(), 2);
    }

    #[test]
    fn test_read_replays_peeked_sequence() {
        let mut input = Lookahead::new(StrSource::new("xyz"));
        assert_eq!(input.peek(3).unwrap(), Some('z'));
        assert_eq!(input.read().unwrap(), Some('x'));
        assert_eq!(input.read().unwrap(), Some('y'));
        assert_eq!(input.read().unwrap(), Some('z'));
        assert_eq!(input.read().unwrap(), None);
    }

    #[test]
    fn test_peek_past_end() {
        let mut input = Lookahead::new(StrSource::new("a"));
        assert_eq!(input.peek(4).unwrap(), None);
        assert_eq!(input.read().unwrap(), Some('a'));
        assert_eq!(input.read().unwrap(), None);
        assert_eq!(input.read().unwrap(), None);
    }

    #[test]
    fn test_interleaved_peek_and_read() {
        let mut input = Lookahead::new(StrSource::new("1234"));
        assert_eq!(input.peek(1).unwrap(), Some('1'));
        assert_eq!(input.read().unwrap(), Some('1'));
        assert_eq!(input.peek(2).unwrap(), Some('3'));
        assert_eq!(input.read().unwrap(), Some('2'));
        assert_eq!(input.peek(1).unwrap(), Some('3'));
        assert_eq!(input.read().unwrap(), Some('3'));
        assert_eq!(input.read().unwrap(), Some('4'));
    }

    #[test]
    fn test_source_pulled_once_per_code_point() {
        let mut input = Lookahead::new(Counting {
            inner: StrSource::new("abc"),
            pulls: 0,
        });
        input.peek(3).unwrap();
        input.peek(2).unwrap();
        input.read().unwrap();
        input.read().unwrap();
        input.read().unwrap();
        assert_eq!(input.source.pulls, 3);
    }

    #[test]
    fn test_source_fault_propagates() {
        let mut input = Lookahead::new(Broken);
        assert!(input.peek(1).unwrap_err().is_io());
        assert!(input.read().unwrap_err().is_io());
    }

    #[test]
    #[should_panic(expected = "peek depth starts at 1")]
    fn test_peek_zero_panics() {
        let mut input = Lookahead::new(StrSource::new("a"));
        let _ = input.peek(0);
    }
}
