//! Parsers for `/proc/pressure/*` files.
//!
//! These are pure functions over the file content, so they are testable
//! with plain string inputs.
//!
//! Format:
//! ```text
//! some avg10=0.00 avg60=0.00 avg300=0.00 total=0
//! full avg10=0.00 avg60=0.00 avg300=0.00 total=0
//! ```

use std::collections::HashMap;

use crate::storage::model::PressureSnapshot;

/// Keys every pressure line must carry.
const REQUIRED_KEYS: [&str; 4] = ["avg10", "avg60", "avg300", "total"];

/// Error type for parsing failures.
///
/// `line` is the 0-based line of the record: 0 is "some", 1 is "full".
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The record has fewer lines than the parser consumes.
    TooFewLines { expected: usize, found: usize },
    /// A token is not a single `key=value` pair.
    MalformedField { line: usize, token: String },
    /// A required key is absent.
    MissingField { line: usize, field: &'static str },
    /// A required key holds a value that is not a number.
    InvalidValue {
        line: usize,
        field: &'static str,
        raw: String,
        cause: String,
    },
}

impl ParseError {
    /// Name of the offending field, when the error is about one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ParseError::MissingField { field, .. } | ParseError::InvalidValue { field, .. } => {
                Some(*field)
            }
            ParseError::MalformedField { token, .. } => Some(token.as_str()),
            ParseError::TooFewLines { .. } => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::TooFewLines { expected, found } => {
                write!(f, "too few lines: expected {}, got {}", expected, found)
            }
            ParseError::MalformedField { line, token } => write!(
                f,
                "line {}: field {:?} is not in key=value format",
                line, token
            ),
            ParseError::MissingField { line, field } => {
                write!(f, "line {}: missing expected field {:?}", line, field)
            }
            ParseError::InvalidValue {
                line,
                field,
                raw,
                cause,
            } => write!(
                f,
                "line {}: failed to parse {} value {:?}: {}",
                line, field, raw, cause
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a memory or io record: a "some" line followed by a "full" line.
pub fn parse_resource_record(
    content: &str,
) -> Result<(PressureSnapshot, PressureSnapshot), ParseError> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 2 {
        return Err(ParseError::TooFewLines {
            expected: 2,
            found: lines.len(),
        });
    }

    let some = parse_pressure_line(0, lines[0])?;
    let full = parse_pressure_line(1, lines[1])?;
    Ok((some, full))
}

/// Parses a cpu record.
///
/// Only the "some" line is consumed; some kernels omit "full" for cpu and
/// where present it is always zero, so `full` is returned as all-zero.
pub fn parse_cpu_record(content: &str) -> Result<(PressureSnapshot, PressureSnapshot), ParseError> {
    let first = content.lines().next().ok_or(ParseError::TooFewLines {
        expected: 1,
        found: 0,
    })?;

    let some = parse_pressure_line(0, first)?;
    Ok((some, PressureSnapshot::default()))
}

/// Parses one `tag key=value ...` line. The tag itself is not checked.
fn parse_pressure_line(index: usize, line: &str) -> Result<PressureSnapshot, ParseError> {
    let fields = line.split_once(' ').map(|(_, rest)| rest).unwrap_or("");

    let mut values: HashMap<&str, &str> = HashMap::new();
    for token in fields.split(' ') {
        match token.split_once('=') {
            Some((key, value)) if !value.contains('=') => {
                values.insert(key, value);
            }
            _ => {
                return Err(ParseError::MalformedField {
                    line: index,
                    token: token.to_string(),
                });
            }
        }
    }

    for key in REQUIRED_KEYS {
        if !values.contains_key(key) {
            return Err(ParseError::MissingField {
                line: index,
                field: key,
            });
        }
    }

    let float = |field: &'static str| -> Result<f64, ParseError> {
        let raw = values[field];
        raw.parse::<f64>().map_err(|e| ParseError::InvalidValue {
            line: index,
            field,
            raw: raw.to_string(),
            cause: e.to_string(),
        })
    };

    let avg10 = float("avg10")?;
    let avg60 = float("avg60")?;
    let avg300 = float("avg300")?;

    let raw_total = values["total"];
    let total = raw_total
        .parse::<i64>()
        .map_err(|e| ParseError::InvalidValue {
            line: index,
            field: "total",
            raw: raw_total.to_string(),
            cause: e.to_string(),
        })?;

    Ok(PressureSnapshot {
        avg10,
        avg60,
        avg300,
        total,
    })
}
