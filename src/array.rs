use crate::{
    error::{ErrorKind, SyntaxError},
    parser::Reader,
    read_value, Value,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Array {
    inner: Vec<Value>,
}

impl Array {
    pub fn from_json(bytes: &[u8]) -> Result<Self, SyntaxError> {
        Reader::read_all(bytes, read_array)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.inner.iter()
    }
}

impl From<Vec<Value>> for Array {
    fn from(value: Vec<Value>) -> Self {
        Self { inner: value }
    }
}

pub(crate) fn read_array(reader: &mut Reader) -> Result<Array, SyntaxError> {
    if !reader.eat(b'[') {
        return Err(reader.error(ErrorKind::ExpectedValue));
    }

    reader.skip_whitespace();
    if reader.eat(b']') {
        return Ok(Array::default());
    }

    let mut inner = Vec::new();
    loop {
        inner.push(read_value(reader)?);

        match reader.peek_byte() {
            Some(b']') => {
                reader.advance();
                break;
            }
            Some(b',') => {
                reader.advance();
                reader.skip_whitespace();
                if reader.peek_byte() == Some(b']') {
                    return Err(reader.error(ErrorKind::TrailingComma));
                }
            }
            Some(_) => return Err(reader.error(ErrorKind::ExpectedCommaOrRightBracket)),
            None => return Err(reader.error(ErrorKind::UnexpectedEof)),
        }
    }

    Ok(Array { inner })
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = <Vec<Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Array::from_json(b"[ ]"), Ok(Array::default()));
    }

    #[test]
    fn test_mixed() {
        let arr = Array::from_json(br#"[null, false, true, 1.2, "a,b", [""]]"#).unwrap();
        assert_eq!(arr.len(), 6);
        assert_eq!(arr.iter().next(), Some(&Value::Null));
        assert!(matches!(arr.iter().last(), Some(Value::Array(inner)) if inner.len() == 1));
    }

    #[test]
    fn test_trailing_comma() {
        let err = Array::from_json(b"[1, 2, ]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TrailingComma);
        assert_eq!(err.column, 8);
    }

    #[test]
    fn test_missing_comma() {
        let err = Array::from_json(b"[1 2]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedCommaOrRightBracket);
        assert_eq!(err.offset, 3);
    }
}
