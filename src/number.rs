use std::{fmt::Display, str};

use crate::{
    error::{ErrorKind, SyntaxError},
    parser::Reader,
};

/// A JSON number, kept as the lexeme it was written as.
///
/// Besides the standard grammar this accepts `NaN`, `Infinity` and
/// `-Infinity`. Numbers too large for `f64` are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    lexeme: Box<str>,
}

impl Number {
    pub fn from_json(bytes: &[u8]) -> Result<Self, SyntaxError> {
        Reader::read_all(bytes, read_number)
    }

    pub fn as_str(&self) -> &str {
        &self.lexeme
    }

    /// The value as an `f64`; overflowing lexemes become infinite.
    pub fn as_f64(&self) -> f64 {
        self.lexeme.parse().unwrap_or(f64::NAN)
    }
}

/// Consumes `word` or fails with the position where it should have started.
fn expect_word(reader: &mut Reader, start: usize, word: &'static str) -> Result<(), SyntaxError> {
    for &expected in word.as_bytes() {
        if !reader.eat(expected) {
            return Err(reader.error_at(start, ErrorKind::ExpectedLiteral(word)));
        }
    }
    Ok(())
}

fn skip_digits(reader: &mut Reader) -> bool {
    let mut found_digit = false;
    while let Some(b'0'..=b'9') = reader.peek_byte() {
        reader.advance();
        found_digit = true;
    }
    found_digit
}

fn skip_number(reader: &mut Reader) -> Result<(), SyntaxError> {
    let start = reader.pos();
    let negative = reader.eat(b'-');

    match reader.peek_byte() {
        Some(b'I') => return expect_word(reader, start, "Infinity"),
        Some(b'N') if !negative => return expect_word(reader, start, "NaN"),
        Some(b'0') => {
            reader.eat(b'0');
        }
        Some(b'1'..=b'9') => {
            skip_digits(reader);
        }
        Some(_) => return Err(reader.error(ErrorKind::InvalidNumber)),
        None => return Err(reader.error(ErrorKind::UnexpectedEof)),
    }

    if reader.eat(b'.') && !skip_digits(reader) {
        return Err(reader.error(ErrorKind::InvalidNumber));
    }

    if reader.eat(b'e') || reader.eat(b'E') {
        if !reader.eat(b'+') {
            reader.eat(b'-');
        }
        if !skip_digits(reader) {
            return Err(reader.error(ErrorKind::InvalidNumber));
        }
    }

    Ok(())
}

pub(crate) fn read_number(reader: &mut Reader) -> Result<Number, SyntaxError> {
    let start = reader.pos();
    let (slice, _) = reader.parse_slice(skip_number)?;
    // The grammar above only admits ASCII.
    let lexeme =
        str::from_utf8(slice).map_err(|_| reader.error_at(start, ErrorKind::InvalidNumber))?;

    Ok(Number {
        lexeme: lexeme.into(),
    })
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
