use std::collections::HashMap;

use crate::http::parser::ParseError;

/// Name/value pairs from a `Cookie` request header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    entries: HashMap<String, String>,
}

impl CookieJar {
    /// Parses a `Cookie` header value such as `JSESSIONID=abc; theme=dark`.
    ///
    /// An absent or blank header gives an empty jar. Every pair must contain
    /// exactly one `=`, otherwise [`ParseError::MalformedCookiePair`]. Blank
    /// segments, such as the one after a trailing `;`, are ignored.
    pub fn parse(header: Option<&str>) -> Result<Self, ParseError> {
        let mut jar = Self::default();

        let Some(header) = header.filter(|h| !h.trim().is_empty()) else {
            return Ok(jar);
        };

        for segment in header.split(';') {
            if segment.trim().is_empty() {
                continue;
            }

            let mut parts = segment.split('=');
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(ParseError::MalformedCookiePair);
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(ParseError::MalformedCookiePair);
            }

            jar.entries.insert(key.to_string(), value.trim().to_string());
        }

        Ok(jar)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
