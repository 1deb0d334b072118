use std::collections::HashMap;

use crate::http::form::parse_pairs;
use crate::http::parser::ParseError;

/// The request target split into route, extension and query parameters.
///
/// The route never contains `?`. The extension is taken from the last path
/// segment only, so `/v1.2/users` has no extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    route: String,
    extension: String,
    query: HashMap<String, String>,
}

impl RequestPath {
    /// Parses a raw request target such as `/login?account=gugu`.
    ///
    /// A target without `?` has an empty query map. Query pairs are split
    /// literally, without percent-decoding, and a pair missing `=` is
    /// rejected with [`ParseError::MalformedQueryPair`].
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let (route, query) = match raw.split_once('?') {
            Some((route, query)) => (route, parse_pairs(query, ParseError::MalformedQueryPair)?),
            None => (raw, HashMap::new()),
        };

        Ok(Self {
            route: route.to_string(),
            extension: extension_of(route).to_string(),
            query,
        })
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(|v| v.as_str())
    }
}

/// The text after the last `.` of the final path segment, or `""`.
pub fn extension_of(route: &str) -> &str {
    let last_segment = route.rsplit('/').next().unwrap_or(route);
    last_segment.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_only_from_last_segment() {
        let path = RequestPath::parse("/v1.2/users").unwrap();
        assert_eq!(path.route(), "/v1.2/users");
        assert_eq!(path.extension(), "");
    }

    #[test]
    fn trailing_question_mark_has_empty_query() {
        let path = RequestPath::parse("/index.html?").unwrap();
        assert_eq!(path.route(), "/index.html");
        assert!(path.query().is_empty());
    }
}
