use std::collections::HashMap;

use crate::{
    error::{ErrorKind, SyntaxError},
    parser::Reader,
    read_value,
    string::{read_string, JsonString},
    Value,
};

/// A JSON object with its members in source order.
///
/// Repeated keys are kept as separate members rather than collapsed, so a
/// document can be checked for keys that a map-based decoder would silently
/// overwrite. Lookups follow the usual "last one wins" rule.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Object {
    members: Vec<(JsonString, Value)>,
}

impl Object {
    pub fn from_json(bytes: &[u8]) -> Result<Object, SyntaxError> {
        Reader::read_all(bytes, read_object)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members as written, counting repeated keys.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Every key occurrence, in source order.
    pub fn keys(&self) -> impl Iterator<Item = &JsonString> {
        self.members.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JsonString, &Value)> {
        self.members.iter().map(|(k, v)| (k, v))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        let key = JsonString::from(key);
        self.members
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Keys that occur more than once, each listed once in order of first
    /// occurrence.
    pub fn duplicate_keys(&self) -> Vec<&JsonString> {
        let mut counts: HashMap<&JsonString, usize> = HashMap::new();
        for key in self.keys() {
            *counts.entry(key).or_default() += 1;
        }
        let mut duplicates = Vec::new();
        for key in self.keys() {
            if let Some(count) = counts.get_mut(key) {
                if *count > 1 {
                    duplicates.push(key);
                    // Report each key once.
                    *count = 0;
                }
            }
        }
        duplicates
    }
}

pub(crate) fn read_object(reader: &mut Reader) -> Result<Object, SyntaxError> {
    if !reader.eat(b'{') {
        return Err(reader.error(ErrorKind::ExpectedValue));
    }
    reader.skip_whitespace();
    if reader.eat(b'}') {
        return Ok(Object::default());
    }

    let mut members = Vec::new();
    loop {
        let key = read_string(reader)?;

        reader.skip_whitespace();
        if !reader.eat(b':') {
            return Err(reader.error(ErrorKind::ExpectedColon));
        }

        let value = read_value(reader)?;
        members.push((key, value));

        match reader.peek_byte() {
            Some(b'}') => {
                reader.advance();
                break;
            }
            Some(b',') => {
                reader.advance();
                reader.skip_whitespace();
                if reader.peek_byte() == Some(b'}') {
                    return Err(reader.error(ErrorKind::TrailingComma));
                }
            }
            Some(_) => return Err(reader.error(ErrorKind::ExpectedCommaOrRightBrace)),
            None => return Err(reader.error(ErrorKind::UnexpectedEof)),
        }
    }
    Ok(Object { members })
}

impl IntoIterator for Object {
    type Item = (JsonString, Value);
    type IntoIter = <Vec<(JsonString, Value)> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_obj_with_whitespace() {
        let o = Object::from_json(br#"{ "a" : "b" , "c" : "d" }"#).unwrap();
        assert_eq!(o.len(), 2);
        assert_eq!(o.get("a"), Some(&"b".into()));
        assert_eq!(o.get("c"), Some(&"d".into()));
        assert!(o.duplicate_keys().is_empty());
    }

    #[test]
    fn test_repeated_keys_are_kept() {
        let o = Object::from_json(br#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        assert_eq!(o.len(), 3);
        let keys: Vec<_> = o.keys().map(|k| k.to_string_lossy()).collect();
        assert_eq!(keys, ["a", "b", "a"]);
        assert_eq!(o.get("a").map(ToString::to_string), Some("3".to_owned()));
    }

    #[test]
    fn test_duplicate_keys_in_first_occurrence_order() {
        let o =
            Object::from_json(br#"{"z": 0, "a": 1, "z": 2, "a": 3, "z": 4, "m": 5}"#).unwrap();
        let dups: Vec<_> = o.duplicate_keys().into_iter().cloned().collect();
        assert_eq!(dups, [JsonString::from("z"), JsonString::from("a")]);
    }

    #[test]
    fn test_escaped_key_equals_plain_key() {
        let o = Object::from_json(br#"{"a": 1, "\u0061": 2}"#).unwrap();
        assert_eq!(o.duplicate_keys(), [&JsonString::from("a")]);
    }

    #[test]
    fn test_nested_duplicates_do_not_count() {
        let o = Object::from_json(br#"{"a": {"x": 1, "x": 2}}"#).unwrap();
        assert!(o.duplicate_keys().is_empty());
    }

    #[test]
    fn test_errors() {
        let cases: [(&[u8], ErrorKind); 5] = [
            (br#"{"a": 1,}"#, ErrorKind::TrailingComma),
            (br#"{"a" 1}"#, ErrorKind::ExpectedColon),
            (br#"{"a": 1 "b": 2}"#, ErrorKind::ExpectedCommaOrRightBrace),
            (br#"{a: 1}"#, ErrorKind::ExpectedKey),
            (br#"{"a": 1"#, ErrorKind::UnexpectedEof),
        ];
        for (input, kind) in cases {
            assert_eq!(Object::from_json(input).unwrap_err().kind, kind);
        }
    }
}
