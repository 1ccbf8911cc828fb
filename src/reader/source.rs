//! Raw line source
//!
//! Reads one line per call from a buffered reader and decodes it as
//! Latin-1: every byte maps to the code point of the same value, so no
//! input byte can fail decoding.

use std::io::{self, BufRead};

/// Decodes bytes as Latin-1
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Line-at-a-time reader over any `BufRead`.
///
/// Holds at most one line in memory beyond what the inner reader buffers.
pub struct LineSource<R> {
    inner: R,
    buf: Vec<u8>,
    lines_consumed: u64,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            lines_consumed: 0,
        }
    }

    /// Reads the next line without its `\n` or `\r\n` terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let n = self.inner.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.lines_consumed += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        Ok(Some(decode_latin1(&self.buf)))
    }

    /// Physical lines read so far, header included
    pub fn lines_consumed(&self) -> u64 {
        self.lines_consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_in_order() {
        let mut source = LineSource::new(Cursor::new("a,b\r\nc,d\ne,f"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("a,b"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("c,d"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("e,f"));
        assert_eq!(source.read_line().unwrap(), None);
        assert_eq!(source.lines_consumed(), 3);
    }

    #[test]
    fn test_blank_line_is_a_line() {
        let mut source = LineSource::new(Cursor::new("\n"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn test_non_utf8_bytes_decoded_as_latin1() {
        let bytes: &[u8] = b"CAF\xC9,M\xFCller\n";
        let mut source = LineSource::new(Cursor::new(bytes));
        assert_eq!(
            source.read_line().unwrap().as_deref(),
            Some("CAF\u{c9},M\u{fc}ller")
        );
    }

    #[test]
    fn test_decode_latin1_full_range() {
        let all: Vec<u8> = (0..=255).collect();
        let decoded = decode_latin1(&all);
        assert_eq!(decoded.chars().count(), 256);
        assert_eq!(decoded.chars().last(), Some('\u{ff}'));
    }
}
