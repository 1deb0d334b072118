use indexmap::IndexMap;

use crate::http::parser::ParseError;

/// Header fields keyed exactly as received.
///
/// Keys are case-sensitive: `Content-Type` and `content-type` are two
/// entries. Iteration follows insertion order, which is also the order the
/// response writer emits them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses header lines until the first blank line or the end of input.
    ///
    /// Each line is split on its first `:`; both halves are trimmed. A line
    /// without `:` fails with [`ParseError::MalformedHeaderLine`].
    pub fn parse<'a, I>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut headers = Self::new();

        for line in lines {
            if line.trim().is_empty() {
                break;
            }

            let (key, value) = line
                .split_once(':')
                .ok_or(ParseError::MalformedHeaderLine)?;

            headers.set(key.trim(), value.trim());
        }

        Ok(headers)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Inserts or overwrites a header. An overwrite keeps the original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (k, v) in iter {
            headers.set(k, v);
        }
        headers
    }
}
