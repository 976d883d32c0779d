use std::fmt::Display;

use wtf8::{CodePoint, Wtf8Buf};

use crate::{
    error::{ErrorKind, SyntaxError},
    parser::Reader,
};

/// A JSON string is just a list of 16-bit values.
///
/// They are often valid UTF-16 strings, however they can contain lonely
/// [surrogate code points](https://www.unicode.org/glossary/#surrogate_code_point),
/// so two keys are only equal when their code points are.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonString {
    inner: Wtf8Buf,
}

fn hex_value(byte: u8) -> Option<u16> {
    match byte {
        b'0'..=b'9' => Some(u16::from(byte - b'0')),
        b'a'..=b'f' => Some(u16::from(byte - b'a' + 10)),
        b'A'..=b'F' => Some(u16::from(byte - b'A' + 10)),
        _ => None,
    }
}

fn read_hex_escape(reader: &mut Reader) -> Result<CodePoint, SyntaxError> {
    let start = reader.pos();
    let digits = reader.read_bytes::<4>()?;
    let mut v: u16 = 0;
    for &b in digits {
        let d = hex_value(b)
            .ok_or_else(|| reader.error_at(start, ErrorKind::InvalidUnicodeEscape))?;
        v = v * 16 + d;
    }
    CodePoint::from_u32(v.into())
        .ok_or_else(|| reader.error_at(start, ErrorKind::InvalidUnicodeEscape))
}

pub(crate) fn read_string(reader: &mut Reader) -> Result<JsonString, SyntaxError> {
    if !reader.eat(b'"') {
        return Err(reader.error(ErrorKind::ExpectedKey));
    }

    let mut inner = Wtf8Buf::new();
    loop {
        let Some(b) = reader.peek_byte() else {
            return Err(reader.error(ErrorKind::UnexpectedEof));
        };
        match b {
            b'"' => {
                reader.advance();
                break;
            }
            b'\\' => {
                let escape_at = reader.pos();
                reader.advance();
                let c = match reader.read_byte()? {
                    b'"' => '"',
                    b'\\' => '\\',
                    b'/' => '/',
                    b'b' => '\x08',
                    b'f' => '\x0c',
                    b'n' => '\n',
                    b'r' => '\r',
                    b't' => '\t',
                    b'u' => {
                        inner.push(read_hex_escape(reader)?);
                        continue;
                    }
                    _ => return Err(reader.error_at(escape_at, ErrorKind::InvalidEscape)),
                };
                inner.push_char(c);
            }
            0x00..=0x1f => return Err(reader.error(ErrorKind::ControlCharacterInString(b))),
            _ => inner.push_char(reader.read_char()?),
        }
    }

    Ok(JsonString { inner })
}

/// Writes the string as a JSON string literal.
impl Display for JsonString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"")?;

        for c in self.inner.code_points() {
            let Some(c) = c.to_char() else {
                write!(f, "\\u{:04x}", c.to_u32())?;
                continue;
            };
            match c {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\x08' => write!(f, "\\b")?,
                '\x0c' => write!(f, "\\f")?,
                '\n' => write!(f, "\\n")?,
                '\r' => write!(f, "\\r")?,
                '\t' => write!(f, "\\t")?,
                '\x00'..='\x1f' => write!(f, "\\u{:04x}", u32::from(c))?,
                _ => write!(f, "{c}")?,
            }
        }

        write!(f, "\"")
    }
}

impl JsonString {
    pub fn from_json(bytes: &[u8]) -> Result<Self, SyntaxError> {
        Reader::read_all(bytes, read_string)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.inner.as_str()
    }

    pub fn to_string_lossy(&self) -> String {
        self.inner.clone().into_string_lossy()
    }
}

impl From<&str> for JsonString {
    fn from(value: &str) -> Self {
        Self {
            inner: Wtf8Buf::from_str(value),
        }
    }
}
