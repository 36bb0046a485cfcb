//! Bounded in-memory table.
//!
//! The same type backs the session's main table and the intermediate
//! results handed between pipeline stages. In both cases every record
//! shares one width, fixed by the first record pushed (or by the caller for
//! derived tables).

use crate::error::{Error, Result};
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
    width: Option<usize>,
    max_rows: usize,
}

impl Table {
    /// An empty table whose width is set by the first pushed record.
    pub fn new(max_rows: usize) -> Self {
        Self {
            records: Vec::new(),
            width: None,
            max_rows,
        }
    }

    /// An empty table with a known width, used for operator output.
    pub fn with_width(width: usize, max_rows: usize) -> Self {
        Self {
            records: Vec::new(),
            width: Some(width),
            max_rows,
        }
    }

    /// Width shared by all records, once established.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Width, or zero while none is established.
    pub fn cols(&self) -> usize {
        self.width.unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.max_rows
    }

    /// Nothing to show: no rows, or no columns.
    pub fn has_no_data(&self) -> bool {
        self.is_empty() || self.cols() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Append a record, fixing the width if this is the first one.
    ///
    /// Either the record is appended or the table is left untouched.
    pub fn push(&mut self, record: Record) -> Result<()> {
        if self.is_full() {
            return Err(Error::TableFull {
                max: self.max_rows,
            });
        }
        match self.width {
            Some(width) if width != record.width() => {
                return Err(Error::RecordWidthMismatch {
                    expected: width,
                    got: record.width(),
                });
            }
            Some(_) => {}
            None => self.width = Some(record.width()),
        }
        self.records.push(record);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
