//! # data-wrangler
//!
//! An interactive, line-oriented engine over one in-memory table of
//! positive integers.
//!
//! ## Overview
//!
//! Each input line is a command:
//! - **`a1,2,3`**: append a record; the first record fixes the column count
//! - **`?`**: print the table
//! - **`p2,3`**: project onto 1-based columns
//! - **`s2<5`**: select rows by comparing one column with a value
//!
//! Project and select stages can be chained with `|`, each stage reading
//! the previous one's result: `p1,2|s1>3|p2`.
//!
//! ## Example
//!
//! ```
//! use data_wrangler::{BufferPrinter, Session};
//!
//! let mut session = Session::default();
//! let mut out = BufferPrinter::new();
//! for line in ["a1,2,3", "a4,5,6", "s2<5|p3,1"] {
//!     session.process_line(line, &mut out).unwrap();
//! }
//!
//! assert_eq!(out.lines().last().unwrap(), "3, 1");
//! ```

pub mod config;
pub mod dsl;
pub mod error;
pub mod executor;
pub mod parse;
pub mod printer;
pub mod record;
pub mod relational;
pub mod source;
pub mod stage;
pub mod table;

pub use config::{Limits, MAX_COLS, MAX_LINE_LEN, MAX_PROJECT, MAX_ROWS};
pub use dsl::{ArgLimits, Command, CommandKind, parse_line};
pub use error::{Error, ParseError, Result};
pub use executor::Session;
pub use parse::{Comparator, Comparison, ParsedList, parse_integers, parse_operator};
pub use printer::{BufferPrinter, EMPTY_DATA, Printer, WritePrinter, render_table};
pub use record::Record;
pub use relational::{Added, add, project, select};
pub use source::{InputLine, LineSource, ReaderSource};
pub use stage::{Sink, Source, StageRole, StageTracker};
pub use table::Table;
