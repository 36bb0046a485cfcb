//! Line acquisition.

use std::io::{self, BufRead};

/// One input line with whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub text: String,
    /// Characters dropped because the line was over the length limit.
    pub overflow: usize,
}

impl InputLine {
    pub fn is_truncated(&self) -> bool {
        self.overflow > 0
    }

    /// Warning shown for an over-long line.
    pub fn overflow_warning(&self) -> String {
        format!("Warning! {} over limit. Line truncated.", self.overflow)
    }
}

/// Yields stripped lines until input is exhausted.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<InputLine>>;
}

/// [`LineSource`] over any buffered reader.
pub struct ReaderSource<R: BufRead> {
    reader: R,
    max_len: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            max_len,
            buf: Vec::new(),
        }
    }
}

/// Drop whitespace, keeping at most `max_len` characters. Every character
/// seen after the limit is reached counts as overflow.
pub fn strip_line(raw: &str, max_len: usize) -> InputLine {
    let mut text = String::new();
    let mut kept = 0;
    let mut overflow = 0;
    for c in raw.chars() {
        if kept < max_len {
            if !c.is_whitespace() {
                text.push(c);
                kept += 1;
            }
        } else {
            overflow += 1;
        }
    }
    InputLine { text, overflow }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<InputLine>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 becomes U+FFFD and fails later as a bad command.
        let decoded = String::from_utf8_lossy(&self.buf);
        let raw = decoded.strip_suffix('\n').unwrap_or(&*decoded);
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        Ok(Some(strip_line(raw, self.max_len)))
    }
}
