use std::fmt::Display;

/// Why the reader gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("trailing characters after JSON value")]
    TrailingCharacters,
    #[error("unexpected UTF-8 byte order mark")]
    UnexpectedBom,
    #[error("expected value")]
    ExpectedValue,
    #[error("expected `{0}`")]
    ExpectedLiteral(&'static str),
    #[error("invalid number")]
    InvalidNumber,
    #[error("control character (\\u{0:04x}) found while parsing a string")]
    ControlCharacterInString(u8),
    #[error("invalid escape")]
    InvalidEscape,
    #[error("invalid \\u escape")]
    InvalidUnicodeEscape,
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,
    #[error("expected `,` or `]`")]
    ExpectedCommaOrRightBracket,
    #[error("expected string key")]
    ExpectedKey,
    #[error("expected `:` after object key")]
    ExpectedColon,
    #[error("expected `,` or `}}`")]
    ExpectedCommaOrRightBrace,
    #[error("trailing comma")]
    TrailingComma,
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// A syntax error with the position it was found at.
///
/// `line` and `column` are 1-based and `column` counts characters, so the
/// position matches what an editor shows. `offset` is the byte offset into the
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl SyntaxError {
    pub(crate) fn at(bytes: &[u8], offset: usize, kind: ErrorKind) -> Self {
        let offset = offset.min(bytes.len());
        let before = &bytes[..offset];
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
        // Continuation bytes don't start a character.
        let column = 1 + before[line_start..]
            .iter()
            .filter(|&&b| b & 0xC0 != 0x80)
            .count();
        Self {
            kind,
            line,
            column,
            offset,
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {} column {} (byte {})",
            self.kind, self.line, self.column, self.offset
        )
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_position_counts_lines_and_chars() {
        let src = "{\n  \"é\": x".as_bytes();
        let offset = src.iter().position(|&b| b == b'x').unwrap();
        let err = SyntaxError::at(src, offset, ErrorKind::ExpectedValue);
        assert_eq!((err.line, err.column, err.offset), (2, 8, offset));
    }

    #[test]
    fn test_display() {
        let err = SyntaxError::at(b"[1,]", 3, ErrorKind::TrailingComma);
        assert_eq!(err.to_string(), "trailing comma at line 1 column 4 (byte 3)");
    }
}
