//! Checks JSON configuration files for syntax errors and duplicate top-level
//! keys, and renders a pass/fail report.
//!
//! The JSON reader in this crate keeps every key occurrence of an object, so
//! repeated keys survive parsing instead of being collapsed the way a
//! map-based decoder would.

mod array;
pub mod check;
pub mod config;
mod error;
mod number;
mod object;
mod parser;
pub mod report;
mod string;

use std::fmt::Display;

use crate::{
    array::read_array, number::read_number, object::read_object, parser::Reader,
    string::read_string,
};

pub use crate::{
    array::Array,
    check::{check_document, check_file, CheckFailure, FileCheckResult, Status, Validator},
    config::{CheckConfig, DEFAULT_FILES},
    error::{ErrorKind, SyntaxError},
    number::Number,
    object::Object,
    report::Report,
    string::JsonString,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(JsonString),
    Array(Array),
    Object(Object),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value.into())
    }
}

fn read_literal(
    reader: &mut Reader,
    literal: &'static str,
    value: Value,
) -> Result<Value, SyntaxError> {
    let start = reader.pos();
    for &expected in literal.as_bytes() {
        if !reader.eat(expected) {
            return Err(reader.error_at(start, ErrorKind::ExpectedLiteral(literal)));
        }
    }
    Ok(value)
}

pub(crate) fn read_value(reader: &mut Reader) -> Result<Value, SyntaxError> {
    reader.skip_whitespace();

    let Some(b) = reader.peek_byte() else {
        return Err(reader.error(ErrorKind::UnexpectedEof));
    };

    let v = match b {
        b'n' => read_literal(reader, "null", Value::Null)?,
        b'f' => read_literal(reader, "false", Value::Bool(false))?,
        b't' => read_literal(reader, "true", Value::Bool(true))?,
        b'-' | b'0'..=b'9' | b'N' | b'I' => Value::Number(read_number(reader)?),
        b'"' => Value::String(read_string(reader)?),
        b'[' => Value::Array(reader.nested(read_array)?),
        b'{' => Value::Object(reader.nested(read_object)?),
        _ => return Err(reader.error(ErrorKind::ExpectedValue)),
    };

    reader.skip_whitespace();
    Ok(v)
}

impl Value {
    /// Parses a complete JSON document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SyntaxError> {
        Reader::read_all(bytes, read_value)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Number(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Array(v) => {
                write!(f, "[")?;
                for (i, v) in v.iter().enumerate() {
                    if i != 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Object(o) => {
                write!(f, "{{")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    if i != 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
