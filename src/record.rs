//! Integer records.

use std::fmt;

/// Delimiter placed between values when a record is rendered.
pub const DATA_DELIM: &str = ", ";

/// One row of integers. Its width is fixed when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    values: Vec<i64>,
}

impl Record {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    /// Value at a 1-based column position.
    pub fn column(&self, column: usize) -> Option<i64> {
        column
            .checked_sub(1)
            .and_then(|idx| self.values.get(idx))
            .copied()
    }

    /// Drop every value past `width`.
    pub fn truncate(&mut self, width: usize) {
        self.values.truncate(width);
    }

    /// Whether the rendering layer shows this record at all.
    ///
    /// Empty records and records led by a zero are suppressed.
    pub fn is_printable(&self) -> bool {
        self.values.first().is_some_and(|&v| v != 0)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.values.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
        }
        for value in values {
            write!(f, "{DATA_DELIM}{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_delimiter() {
        let record = Record::new(vec![1, 2, 3]);
        assert_eq!(record.to_string(), "1, 2, 3");
        assert_eq!(Record::new(vec![7]).to_string(), "7");
    }

    #[test]
    fn test_column_is_one_based() {
        let record = Record::new(vec![10, 20, 30]);
        assert_eq!(record.column(1), Some(10));
        assert_eq!(record.column(3), Some(30));
        assert_eq!(record.column(0), None);
        assert_eq!(record.column(4), None);
    }

    #[test]
    fn test_printable() {
        assert!(Record::new(vec![1, 0]).is_printable());
        assert!(!Record::new(vec![0, 5]).is_printable());
        assert!(!Record::new(vec![]).is_printable());
    }

    #[test]
    fn test_truncate() {
        let mut record = Record::new(vec![1, 2, 3, 4]);
        record.truncate(2);
        assert_eq!(record.values(), &[1, 2]);
        assert_eq!(record.width(), 2);
    }
}
