use std::collections::HashMap;

use crate::http::parser::ParseError;

/// Splits a flat `key=value&key=value` list into a map.
///
/// Each segment is split on its first `=`; the key must be non-empty after
/// trimming, the value may be empty. A segment without `=` fails with `err`.
/// An empty input yields an empty map.
pub(crate) fn parse_pairs(
    input: &str,
    err: ParseError,
) -> Result<HashMap<String, String>, ParseError> {
    let mut pairs = HashMap::new();

    if input.is_empty() {
        return Ok(pairs);
    }

    for segment in input.split('&') {
        let (key, value) = segment.split_once('=').ok_or(err)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(err);
        }
        pairs.insert(key.to_string(), value.trim().to_string());
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals() {
        let pairs = parse_pairs("token=a=b&x=1", ParseError::MalformedBodyPair).unwrap();
        assert_eq!(pairs["token"], "a=b");
        assert_eq!(pairs["x"], "1");
    }

    #[test]
    fn rejects_segment_without_equals() {
        let err = parse_pairs("account=gugu&password", ParseError::MalformedBodyPair).unwrap_err();
        assert_eq!(err, ParseError::MalformedBodyPair);
    }

    #[test]
    fn rejects_empty_key() {
        assert!(parse_pairs("=value", ParseError::MalformedQueryPair).is_err());
        assert!(parse_pairs("a=1&&b=2", ParseError::MalformedQueryPair).is_err());
    }

    #[test]
    fn allows_empty_value() {
        let pairs = parse_pairs("email=", ParseError::MalformedBodyPair).unwrap();
        assert_eq!(pairs["email"], "");
    }
}
