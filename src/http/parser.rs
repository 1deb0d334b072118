use std::collections::HashMap;

use crate::http::form::parse_pairs;
use crate::http::headers::Headers;
use crate::http::request::{Request, RequestLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed request line")]
    MalformedRequestLine,
    #[error("unsupported request method")]
    InvalidMethod,
    #[error("header line without ':'")]
    MalformedHeaderLine,
    #[error("Content-Length is not a non-negative integer")]
    InvalidContentLength,
    #[error("body pair is not key=value")]
    MalformedBodyPair,
    #[error("query pair is not key=value")]
    MalformedQueryPair,
    #[error("cookie pair is not key=value")]
    MalformedCookiePair,
    #[error("request is not valid UTF-8")]
    InvalidEncoding,
    #[error("request headers too large")]
    HeadersTooLarge,
    #[error("request body too large")]
    BodyTooLarge,
    #[error("incomplete request")]
    Incomplete,
}

/// Request line and headers, parsed before the body has arrived.
#[derive(Debug)]
pub struct RequestHead {
    line: RequestLine,
    headers: Headers,
    body_start: usize,
    content_length: Option<usize>,
}

impl RequestHead {
    /// Bytes the whole request occupies, head and body.
    pub fn total_len(&self) -> usize {
        self.body_start + self.content_length.unwrap_or(0)
    }

    /// Completes the request from the buffer holding it.
    ///
    /// `buf` must hold at least [`total_len`](Self::total_len) bytes.
    pub fn into_request(self, buf: &[u8]) -> Result<Request, ParseError> {
        let body = match self.content_length {
            Some(len) => {
                let raw = buf
                    .get(self.body_start..self.body_start + len)
                    .ok_or(ParseError::Incomplete)?;
                let raw = std::str::from_utf8(raw).map_err(|_| ParseError::InvalidEncoding)?;
                parse_pairs(raw, ParseError::MalformedBodyPair)?
            }
            None => HashMap::new(),
        };

        Ok(Request::new(self.line, self.headers, body))
    }
}

/// Parses the head ending at `headers_end`, the offset of `\r\n\r\n`.
///
/// A `Content-Length` above `max_body_bytes` fails with
/// [`ParseError::BodyTooLarge`] before any of the body is read.
pub fn parse_request_head(
    buf: &[u8],
    headers_end: usize,
    max_body_bytes: usize,
) -> Result<RequestHead, ParseError> {
    let headers_str = std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = headers_str.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::MalformedRequestLine)?;
    let line = RequestLine::parse(request_line)?;

    let headers = Headers::parse(lines)?;

    let content_length = headers
        .get("Content-Length")
        .map(|v| v.parse::<usize>().map_err(|_| ParseError::InvalidContentLength))
        .transpose()?;

    if content_length.is_some_and(|len| len > max_body_bytes) {
        return Err(ParseError::BodyTooLarge);
    }

    Ok(RequestHead {
        line,
        headers,
        body_start: headers_end + 4,
        content_length,
    })
}

/// Parses one request from the front of `buf`.
///
/// Returns the request and the number of bytes it occupied. While the header
/// block or the `Content-Length` body is still short, returns
/// [`ParseError::Incomplete`] so the caller can read more and retry.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    parse_http_request_limited(buf, usize::MAX)
}

/// Like [`parse_http_request`], rejecting bodies over `max_body_bytes`.
pub fn parse_http_request_limited(
    buf: &[u8],
    max_body_bytes: usize,
) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = parse_request_head(buf, headers_end, max_body_bytes)?;

    let total = head.total_len();
    if buf.len() < total {
        return Err(ParseError::Incomplete);
    }

    Ok((head.into_request(buf)?, total))
}

/// Offset of the first `\r\n\r\n` in `buf`.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let (parsed, consumed) = parse_http_request(req).unwrap();

        assert_eq!(parsed.route(), "/");
        assert_eq!(parsed.header("Host"), Some("example.com"));
        assert_eq!(consumed, req.len());
    }

    #[test]
    fn body_is_read_only_up_to_content_length() {
        let req = b"POST /login HTTP/1.1\r\nContent-Length: 12\r\n\r\naccount=gugutrailing";

        let (parsed, consumed) = parse_http_request(req).unwrap();

        assert_eq!(parsed.body_value("account"), Some("gugu"));
        assert_eq!(consumed, req.len() - "trailing".len());
    }

    #[test]
    fn oversized_content_length_fails_before_body_arrives() {
        let req = b"POST /login HTTP/1.1\r\nContent-Length: 1000000000\r\n\r\n";

        assert_eq!(
            parse_http_request_limited(req, 1024).unwrap_err(),
            ParseError::BodyTooLarge
        );
        assert_eq!(parse_http_request(req).unwrap_err(), ParseError::Incomplete);
    }

    #[test]
    fn body_at_limit_is_accepted() {
        let req = b"POST /login HTTP/1.1\r\nContent-Length: 6\r\n\r\na=b&c=";

        let (parsed, _) = parse_http_request_limited(req, 6).unwrap();
        assert_eq!(parsed.body_value("c"), Some(""));
    }
}
