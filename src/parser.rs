use crate::error::{ErrorKind, SyntaxError};

/// Arrays and objects nested deeper than this are rejected.
pub(crate) const MAX_DEPTH: usize = 1000;

pub(crate) struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn read_all<T>(
        bytes: &'a [u8],
        f: impl FnOnce(&mut Reader<'a>) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        let mut reader = Reader::new(bytes);
        if bytes.starts_with(b"\xEF\xBB\xBF") {
            return Err(reader.error(ErrorKind::UnexpectedBom));
        }
        let v = f(&mut reader)?;
        reader.skip_whitespace();
        if !reader.at_end() {
            return Err(reader.error(ErrorKind::TrailingCharacters));
        }
        Ok(v)
    }

    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            depth: 0,
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// An error located at the current position.
    pub(crate) fn error(&self, kind: ErrorKind) -> SyntaxError {
        SyntaxError::at(self.bytes, self.pos, kind)
    }

    pub(crate) fn error_at(&self, pos: usize, kind: ErrorKind) -> SyntaxError {
        SyntaxError::at(self.bytes, pos, kind)
    }

    pub(crate) fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(crate) fn read_byte(&mut self) -> Result<u8, SyntaxError> {
        let b = self
            .peek_byte()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedEof))?;
        self.pos += 1;
        Ok(b)
    }

    /// Skips the byte under the cursor, if any.
    pub(crate) fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.bytes.len());
    }

    /// Consumes `b` if it is the next byte.
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek_byte() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn read_bytes<const N: usize>(&mut self) -> Result<&'a [u8; N], SyntaxError> {
        let rest = &self.bytes[self.pos..];
        match rest.split_first_chunk() {
            Some((chunk, _)) => {
                self.pos += N;
                Ok(chunk)
            }
            None => Err(self.error_at(self.bytes.len(), ErrorKind::UnexpectedEof)),
        }
    }

    /// Reads one UTF-8 encoded character.
    pub(crate) fn read_char(&mut self) -> Result<char, SyntaxError> {
        let rest = &self.bytes[self.pos..];
        if rest.is_empty() {
            return Err(self.error(ErrorKind::UnexpectedEof));
        }
        let prefix = &rest[..rest.len().min(4)];
        let valid = match std::str::from_utf8(prefix) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&prefix[..e.valid_up_to()])
                .map_err(|_| self.error(ErrorKind::InvalidUtf8))?,
        };
        match valid.chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                Ok(c)
            }
            None => Err(self.error(ErrorKind::InvalidUtf8)),
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b'\t' | b'\n' | b'\r' | b' ') = self.peek_byte() {
            self.pos += 1;
        }
    }

    /// The bytes consumed by `f`.
    pub(crate) fn parse_slice<T>(
        &mut self,
        f: impl FnOnce(&mut Reader<'a>) -> Result<T, SyntaxError>,
    ) -> Result<(&'a [u8], T), SyntaxError> {
        let start = self.pos;
        let v = f(self)?;
        Ok((&self.bytes[start..self.pos], v))
    }

    /// Runs `f` one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Reader<'a>) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(ErrorKind::RecursionLimitExceeded));
        }
        self.depth += 1;
        let v = f(self);
        self.depth -= 1;
        v
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_char_multibyte() {
        let mut reader = Reader::new("é!".as_bytes());
        assert_eq!(reader.read_char(), Ok('é'));
        assert_eq!(reader.read_char(), Ok('!'));
        assert!(reader.at_end());
    }

    #[test]
    fn test_read_char_truncated() {
        let mut reader = Reader::new(b"\xC3");
        assert_eq!(reader.read_char().unwrap_err().kind, ErrorKind::InvalidUtf8);
    }

    #[test]
    fn test_bom_rejected() {
        let err = Reader::read_all(b"\xEF\xBB\xBF{}", |r| r.read_byte()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedBom);
        assert_eq!(err.offset, 0);
    }
}
