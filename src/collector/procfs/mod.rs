//! `/proc` parsing.

mod parser;

pub use parser::{ParseError, parse_cpu_record, parse_resource_record};
