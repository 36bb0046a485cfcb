//! Command line parser.
//!
//! Line format (whitespace already stripped):
//! ```text
//! a1,2,3        add a record
//! ?             print the table
//! p2,3          project onto columns 2 and 3
//! s2<5          select rows whose column 2 is less than 5
//! p1,2|s1>3|p2  chained stages
//! ```
//!
//! - The first character of each stage names the command
//! - `|` separates stages; only `p` and `s` may appear in a piped line
//! - Every stage is parsed before any of them runs

use crate::error::{Error, ParseError, Result};
use crate::parse::{Comparison, LIST_DELIM, ParsedList, parse_integers, parse_operator};

pub const ADD: char = 'a';
pub const PRINT: char = '?';
pub const PROJECT: char = 'p';
pub const SELECT: char = 's';
pub const PIPE: char = '|';

/// Caps applied while parsing arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgLimits {
    /// Values kept from an `a` record.
    pub record: usize,
    /// Columns kept from a `p` target list.
    pub project: usize,
}

/// Parsed stage command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// a<int>,<int>,...
    Add { fields: ParsedList },
    /// ?
    Print,
    /// p<int>,<int>,...
    Project {
        /// Retained 1-based target columns.
        columns: Vec<usize>,
        /// Number of targets given on the line.
        requested: usize,
    },
    /// s<int><op><int>
    Select { comparison: Comparison },
}

/// Command kinds, before arguments are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Print,
    Project,
    Select,
}

impl CommandKind {
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            ADD => Ok(CommandKind::Add),
            PRINT => Ok(CommandKind::Print),
            PROJECT => Ok(CommandKind::Project),
            SELECT => Ok(CommandKind::Select),
            other => Err(Error::UnknownCommand(other)),
        }
    }

    pub fn code(self) -> char {
        match self {
            CommandKind::Add => ADD,
            CommandKind::Print => PRINT,
            CommandKind::Project => PROJECT,
            CommandKind::Select => SELECT,
        }
    }

    /// Can this command be one stage of a piped line?
    pub fn can_be_piped(self) -> bool {
        matches!(self, CommandKind::Project | CommandKind::Select)
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add { .. } => CommandKind::Add,
            Command::Print => CommandKind::Print,
            Command::Project { .. } => CommandKind::Project,
            Command::Select { .. } => CommandKind::Select,
        }
    }

    /// Stage name for log output.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "ADD",
            Command::Print => "PRINT",
            Command::Project { .. } => "PROJECT",
            Command::Select { .. } => "SELECT",
        }
    }
}

/// Number of `|` separators in a line.
pub fn pipe_count(line: &str) -> usize {
    line.matches(PIPE).count()
}

/// Parse a whole line into its stages.
///
/// A blank line yields no commands.
pub fn parse_line(line: &str, limits: ArgLimits) -> Result<Vec<Command>> {
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let piped = pipe_count(line) > 0;
    let mut commands = Vec::new();
    for stage in line.split(PIPE) {
        let mut chars = stage.chars();
        let code = chars.next().ok_or(Error::EmptyStage)?;
        let kind = CommandKind::from_char(code)?;
        if piped && !kind.can_be_piped() {
            return Err(Error::NotPipeable(code));
        }
        commands.push(parse_command(kind, chars.as_str(), limits)?);
    }
    Ok(commands)
}

/// Parse the arguments following a command character.
fn parse_command(kind: CommandKind, args: &str, limits: ArgLimits) -> Result<Command> {
    let wrap = |source| Error::Parse {
        command: kind.code(),
        source,
    };

    match kind {
        CommandKind::Add => {
            let fields = parse_integers(args, LIST_DELIM, limits.record).map_err(wrap)?;
            Ok(Command::Add { fields })
        }
        // Anything after `?` is ignored.
        CommandKind::Print => Ok(Command::Print),
        CommandKind::Project => {
            let parsed = parse_integers(args, LIST_DELIM, limits.project).map_err(wrap)?;
            let columns = parsed
                .values
                .iter()
                .map(|&v| {
                    usize::try_from(v).map_err(|_| {
                        wrap(ParseError::MalformedToken(v.to_string()))
                    })
                })
                .collect::<Result<Vec<usize>>>()?;
            Ok(Command::Project {
                columns,
                requested: parsed.total,
            })
        }
        CommandKind::Select => {
            let comparison = parse_operator(args).map_err(wrap)?;
            Ok(Command::Select { comparison })
        }
    }
}
