//! Engine limits.

/// Maximum number of columns in a record.
pub const MAX_COLS: usize = 100;
/// Maximum number of records in the table.
pub const MAX_ROWS: usize = 1000;
/// Maximum number of target columns a projection honors.
pub const MAX_PROJECT: usize = 100;
/// Maximum input line length, counted after whitespace is stripped.
pub const MAX_LINE_LEN: usize = 1000;

/// Capacity limits applied by a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_cols: usize,
    pub max_rows: usize,
    pub max_project: usize,
    pub max_line_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_cols: MAX_COLS,
            max_rows: MAX_ROWS,
            max_project: MAX_PROJECT,
            max_line_len: MAX_LINE_LEN,
        }
    }
}
