//! Error types for the wrangler engine.
//!
//! Almost every error is local to the line that produced it: the line is
//! abandoned, the message is shown, and the session keeps reading. See
//! [`Error::is_fatal`] for the exceptions.

use thiserror::Error;

/// Failure to turn an argument fragment into integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token was not a positive base-10 integer. Zero is rejected too.
    #[error("malformed token '{0}'")]
    MalformedToken(String),

    /// A comparison did not contain exactly two integers.
    #[error("number of arguments should be exactly 2, got {0}")]
    WrongArgCount(usize),

    /// The fragment held no tokens at all.
    #[error("no values given")]
    Empty,
}

/// Errors surfaced by the session while processing a line.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid arguments to '{command}': {source}")]
    Parse {
        command: char,
        #[source]
        source: ParseError,
    },

    #[error("Invalid column {0}.")]
    InvalidColumn(usize),

    #[error("Unknown command '{0}'")]
    UnknownCommand(char),

    #[error("Command '{0}' cannot be piped")]
    NotPipeable(char),

    #[error("Empty pipeline stage")]
    EmptyStage,

    /// A piped stage ran without a result from the stage before it.
    #[error("Pipeline stage has no input from a previous stage")]
    MissingStageInput,

    #[error("{}", width_message(.expected, .got))]
    RecordWidthMismatch { expected: usize, got: usize },

    #[error("Cannot add another record, already at limit of {max}")]
    TableFull { max: usize },

    #[error("Projecting onto {allowed} of {requested} cols specified")]
    ProjectionTruncated { requested: usize, allowed: usize },

    /// The first record is wider than the column limit.
    #[error("Input was {got} columns - must be at most {max}")]
    ColumnLimitExceeded { got: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the session must stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ColumnLimitExceeded { .. } | Error::Io(_))
    }
}

fn width_message(expected: &usize, got: &usize) -> String {
    if got < expected {
        format!("Record's {got} columns too few. Not added.")
    } else {
        format!("Record truncated from {got} to {expected} columns.")
    }
}

pub type Result<T> = std::result::Result<T, Error>;
