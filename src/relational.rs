//! Relational operators: add, project and select.
//!
//! `project` and `select` are pure: they read a table and build a new one,
//! or fail without producing anything. `add` is the only operator that
//! mutates, and it either appends the whole record or leaves the table as
//! it was.

use tracing::trace;

use crate::error::{Error, Result};
use crate::parse::{Comparison, ParsedList};
use crate::record::Record;
use crate::table::Table;

/// A record accepted by [`add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    /// The record as stored.
    pub record: Record,
    /// Original width when the record was cut down to the table's width.
    pub truncated_from: Option<usize>,
}

/// Append a parsed record to `table`.
///
/// The first record fixes the table's width and may not exceed `max_cols`.
/// Later records must be at least as wide as the table; wider ones are
/// truncated and the original width is reported in [`Added`].
pub fn add(table: &mut Table, fields: ParsedList, max_cols: usize) -> Result<Added> {
    let ParsedList { values, total } = fields;
    let mut record = Record::new(values);

    let truncated_from = match table.width() {
        None => {
            if total > max_cols {
                return Err(Error::ColumnLimitExceeded {
                    got: total,
                    max: max_cols,
                });
            }
            None
        }
        Some(cols) if total < cols => {
            return Err(Error::RecordWidthMismatch {
                expected: cols,
                got: total,
            });
        }
        Some(cols) if total > cols => {
            record.truncate(cols);
            Some(total)
        }
        Some(_) => None,
    };

    table.push(record.clone())?;
    trace!(rows = table.len(), cols = table.cols(), "record appended");
    Ok(Added {
        record,
        truncated_from,
    })
}

fn check_column(table: &Table, column: usize) -> Result<()> {
    if column < 1 || column > table.cols() {
        return Err(Error::InvalidColumn(column));
    }
    Ok(())
}

/// Project `table` onto 1-based `targets`, in the order given.
///
/// Every target is validated before any row is built.
pub fn project(table: &Table, targets: &[usize]) -> Result<Table> {
    for &column in targets {
        check_column(table, column)?;
    }

    let mut output = Table::with_width(targets.len(), table.max_rows());
    for record in table {
        let values = targets
            .iter()
            .map(|&c| record.column(c).ok_or(Error::InvalidColumn(c)))
            .collect::<Result<Vec<i64>>>()?;
        output.push(Record::new(values))?;
    }
    trace!(rows = output.len(), cols = output.cols(), "projected");
    Ok(output)
}

/// Keep the rows of `table` whose column satisfies `comparison`, in order.
pub fn select(table: &Table, comparison: &Comparison) -> Result<Table> {
    let Comparison {
        column,
        comparator,
        value,
    } = *comparison;
    check_column(table, column)?;

    let mut output = Table::with_width(table.cols(), table.max_rows());
    for record in table {
        if record
            .column(column)
            .is_some_and(|v| comparator.holds(v, value))
        {
            output.push(record.clone())?;
        }
    }
    trace!(
        kept = output.len(),
        of = table.len(),
        "selected on column {column} {comparator} {value}"
    );
    Ok(output)
}
