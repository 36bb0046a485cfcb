//! Output rendering.
//!
//! The session never writes to a stream itself. It formats rows and
//! messages and hands each finished line to a [`Printer`].

use std::io::{self, Write};

use crate::error::Error;
use crate::record::Record;
use crate::table::Table;

/// Line printed for a table with no rows or no columns.
pub const EMPTY_DATA: &str = "Empty data.";

/// Receives already-formatted output lines.
pub trait Printer {
    /// Output one line. The line carries no trailing newline.
    fn emit(&mut self, line: &str) -> io::Result<()>;

    /// Report a non-fatal problem with the current line.
    fn warn(&mut self, err: &Error) -> io::Result<()> {
        self.emit(&err.to_string())
    }
}

/// Printer writing newline-terminated lines to any [`Write`].
pub struct WritePrinter<W: Write> {
    writer: W,
}

impl<W: Write> WritePrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write text without a newline, e.g. a prompt.
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Printer for WritePrinter<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }
}

/// Printer collecting lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferPrinter {
    lines: Vec<String>,
}

impl BufferPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the collected lines, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Printer for BufferPrinter {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Format a record for output, or `None` if it is suppressed.
pub fn format_record(record: &Record) -> Option<String> {
    record.is_printable().then(|| record.to_string())
}

/// Emit every printable row of `table`, or [`EMPTY_DATA`].
pub fn render_table<P: Printer + ?Sized>(table: &Table, out: &mut P) -> io::Result<()> {
    if table.has_no_data() {
        return out.emit(EMPTY_DATA);
    }
    for line in table.iter().filter_map(format_record) {
        out.emit(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_table() {
        let mut out = BufferPrinter::new();
        render_table(&Table::new(10), &mut out).unwrap();
        assert_eq!(out.lines(), &["Empty data."]);

        let mut out = BufferPrinter::new();
        render_table(&Table::with_width(2, 10), &mut out).unwrap();
        assert_eq!(out.lines(), &["Empty data."]);
    }

    #[test]
    fn test_render_rows() {
        let mut table = Table::new(10);
        table.push(Record::new(vec![1, 2, 3])).unwrap();
        table.push(Record::new(vec![4, 5, 6])).unwrap();
        let mut out = BufferPrinter::new();
        render_table(&table, &mut out).unwrap();
        assert_eq!(out.lines(), &["1, 2, 3", "4, 5, 6"]);
    }

    #[test]
    fn test_zero_led_record_is_suppressed() {
        assert_eq!(format_record(&Record::new(vec![0, 1])), None);
        assert_eq!(format_record(&Record::new(vec![])), None);
        assert_eq!(
            format_record(&Record::new(vec![3, 0])),
            Some("3, 0".to_string())
        );
    }

    #[test]
    fn test_write_printer_appends_newlines() {
        let mut printer = WritePrinter::new(Vec::new());
        printer.emit("1, 2").unwrap();
        printer.write_raw("> ").unwrap();
        let written = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(written, "1, 2\n> ");
    }

    #[test]
    fn test_warn_uses_error_message() {
        let mut out = BufferPrinter::new();
        out.warn(&Error::InvalidColumn(7)).unwrap();
        assert_eq!(out.take(), vec!["Invalid column 7.".to_string()]);
        assert!(out.lines().is_empty());
    }
}
