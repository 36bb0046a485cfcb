//! Argument parsers: delimited integer lists and single comparisons.
//!
//! Both parsers only accept integers strictly greater than zero. A zero
//! token is indistinguishable from garbage and is rejected, so zero-valued
//! data cannot be entered.

use std::fmt;

use crate::error::ParseError;

/// Delimiter between values in `a` and `p` arguments.
pub const LIST_DELIM: char = ',';

/// Comparison characters accepted by `s`.
pub const SELECT_OPERATORS: [char; 3] = ['<', '>', '='];

/// Result of [`parse_integers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedList {
    /// The first `max_results` values, in input order.
    pub values: Vec<i64>,
    /// Number of tokens present, including any that were not retained.
    pub total: usize,
}

impl ParsedList {
    /// Whether some tokens were counted but not retained.
    pub fn is_truncated(&self) -> bool {
        self.total > self.values.len()
    }
}

/// Parse a single token as a positive integer.
fn parse_positive(token: &str) -> Result<i64, ParseError> {
    match token.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::MalformedToken(token.to_string())),
    }
}

/// Parse a `delim`-separated list of positive integers.
///
/// Empty tokens are skipped. Parsing stops at the first malformed token.
/// Tokens beyond `max_results` are still validated and counted but not
/// kept; compare [`ParsedList::total`] with the retained length to detect
/// discarded values.
pub fn parse_integers(
    text: &str,
    delim: char,
    max_results: usize,
) -> Result<ParsedList, ParseError> {
    let mut values = Vec::new();
    let mut total = 0;

    for token in text.split(delim).filter(|t| !t.is_empty()) {
        let n = parse_positive(token)?;
        if total < max_results {
            values.push(n);
        }
        total += 1;
    }

    if total == 0 {
        return Err(ParseError::Empty);
    }
    Ok(ParsedList { values, total })
}

/// Comparison applied by a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    LessThan,
    GreaterThan,
    EqualTo,
}

impl Comparator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Comparator::LessThan),
            '>' => Some(Comparator::GreaterThan),
            '=' => Some(Comparator::EqualTo),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Comparator::LessThan => '<',
            Comparator::GreaterThan => '>',
            Comparator::EqualTo => '=',
        }
    }

    /// Evaluate `lhs <op> rhs`.
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Comparator::LessThan => lhs < rhs,
            Comparator::GreaterThan => lhs > rhs,
            Comparator::EqualTo => lhs == rhs,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed `column<op>value` fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// 1-based column index.
    pub column: usize,
    pub comparator: Comparator,
    pub value: i64,
}

/// Parse a fragment such as `2<5` into a [`Comparison`].
///
/// The fragment is split on every operator character; exactly two positive
/// integers must remain. The comparator is the first operator character in
/// the fragment.
pub fn parse_operator(text: &str) -> Result<Comparison, ParseError> {
    let tokens: Vec<&str> = text
        .split(|c: char| SELECT_OPERATORS.contains(&c))
        .filter(|t| !t.is_empty())
        .collect();

    let mut args = Vec::with_capacity(2);
    for token in &tokens {
        args.push(parse_positive(token)?);
    }
    if args.len() != 2 {
        return Err(ParseError::WrongArgCount(args.len()));
    }

    let comparator = text
        .chars()
        .find_map(Comparator::from_char)
        .ok_or(ParseError::WrongArgCount(args.len()))?;
    let column = usize::try_from(args[0])
        .map_err(|_| ParseError::MalformedToken(tokens[0].to_string()))?;

    Ok(Comparison {
        column,
        comparator,
        value: args[1],
    })
}
