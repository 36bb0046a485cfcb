//! Line-at-a-time command executor.
//!
//! A [`Session`] owns the main table and applies one input line at a time.
//! Each line is parsed into stages up front, then the stages run in order:
//! the [`StageTracker`] decides whether a stage reads the main table or the
//! previous stage's result, and whether its output is kept for the next
//! stage or rendered.

use tracing::{debug, warn};

use crate::config::Limits;
use crate::dsl::{ArgLimits, Command, parse_line, pipe_count};
use crate::error::{Error, Result};
use crate::parse::ParsedList;
use crate::printer::{Printer, render_table};
use crate::relational::{add, project, select};
use crate::stage::{Sink, Source, StageRole, StageTracker};
use crate::table::Table;

/// Prefix of the line echoed after a successful add.
pub const ADDED_PREFIX: &str = "Added record: ";

/// Interactive session state: the table and the limits it was opened with.
///
/// Not reentrant; lines are applied one at a time through `&mut self`.
#[derive(Debug, Clone)]
pub struct Session {
    table: Table,
    limits: Limits,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl Session {
    pub fn new(limits: Limits) -> Self {
        Self {
            table: Table::new(limits.max_rows),
            limits,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Column count fixed by the first add, or zero.
    pub fn cols(&self) -> usize {
        self.table.cols()
    }

    pub fn rows(&self) -> usize {
        self.table.len()
    }

    /// Whether the first record has been added and the width is fixed.
    pub fn first_line_seen(&self) -> bool {
        self.table.width().is_some()
    }

    fn arg_limits(&self) -> ArgLimits {
        ArgLimits {
            record: self.table.width().unwrap_or(self.limits.max_cols),
            project: self.limits.max_project,
        }
    }

    /// Apply one line, reporting non-fatal errors through `out`.
    ///
    /// Returns an error only when the session has to stop.
    pub fn process_line<P: Printer>(&mut self, line: &str, out: &mut P) -> Result<()> {
        match self.execute_line(line, out) {
            Ok(()) => Ok(()),
            Err(err) if err.is_fatal() => {
                warn!(error = %err, "fatal error, session ends");
                Err(err)
            }
            Err(err) => {
                debug!(error = %err, line, "line abandoned");
                out.warn(&err)?;
                Ok(())
            }
        }
    }

    /// Apply one line, returning the first error it hits.
    ///
    /// Warnings that do not stop the line (a truncated record or
    /// projection) are still sent to `out`.
    pub fn execute_line<P: Printer>(&mut self, line: &str, out: &mut P) -> Result<()> {
        let commands = parse_line(line, self.arg_limits())?;
        if commands.is_empty() {
            return Ok(());
        }

        let mut tracker = StageTracker::new(pipe_count(line));
        let mut intermediate: Option<Table> = None;

        for command in commands {
            let Some(role) = tracker.advance() else {
                break;
            };
            debug!(stage = command.name(), ?role, "dispatching");

            match command {
                Command::Add { fields } => self.run_add(fields, out)?,
                Command::Print => render_table(&self.table, out)?,
                Command::Project { columns, requested } => {
                    let source = self.source_for(role, &intermediate)?;
                    if role.source() == Source::Table && source.has_no_data() {
                        render_table(source, out)?;
                        return Ok(());
                    }
                    let projected = project(source, &columns)?;
                    if requested > columns.len() {
                        out.warn(&Error::ProjectionTruncated {
                            requested,
                            allowed: columns.len(),
                        })?;
                    }
                    intermediate = self.route(role, projected, out)?;
                }
                Command::Select { comparison } => {
                    let source = self.source_for(role, &intermediate)?;
                    if role.source() == Source::Table && source.has_no_data() {
                        render_table(source, out)?;
                        return Ok(());
                    }
                    let selected = select(source, &comparison)?;
                    intermediate = self.route(role, selected, out)?;
                }
            }
        }
        Ok(())
    }

    /// The table a stage reads: the main table, or the result the previous
    /// stage stored.
    fn source_for<'a>(
        &'a self,
        role: StageRole,
        intermediate: &'a Option<Table>,
    ) -> Result<&'a Table> {
        match (role.source(), intermediate) {
            (Source::Table, _) => Ok(&self.table),
            (Source::Intermediate, Some(previous)) => Ok(previous),
            (Source::Intermediate, None) => Err(Error::MissingStageInput),
        }
    }

    /// Store `result` for the next stage, or render it.
    fn route<P: Printer>(
        &self,
        role: StageRole,
        result: Table,
        out: &mut P,
    ) -> Result<Option<Table>> {
        match role.sink() {
            Sink::Intermediate => Ok(Some(result)),
            Sink::Emit => {
                render_table(&result, out)?;
                Ok(None)
            }
        }
    }

    fn run_add<P: Printer>(&mut self, fields: ParsedList, out: &mut P) -> Result<()> {
        let added = add(&mut self.table, fields, self.limits.max_cols)?;
        if let Some(got) = added.truncated_from {
            out.warn(&Error::RecordWidthMismatch {
                expected: self.table.cols(),
                got,
            })?;
        }
        debug!(rows = self.table.len(), "record added");
        out.emit(&format!("{ADDED_PREFIX}{}", added.record))?;
        Ok(())
    }
}
