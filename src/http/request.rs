use std::collections::HashMap;
use std::fmt;

use crate::http::cookie::CookieJar;
use crate::http::headers::Headers;
use crate::http::parser::ParseError;
use crate::http::path::RequestPath;

/// HTTP request methods.
///
/// Only GET and POST are routed. The rest are parsed so that the router can
/// answer them with 405 Method Not Allowed instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `METHOD SP target SP version`, with the target already split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub path: RequestPath,
    pub version: String,
}

impl RequestLine {
    /// Parses a request line. Fewer than three space-delimited tokens is a
    /// [`ParseError::MalformedRequestLine`]; tokens past the third are ignored.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut parts = line.split_whitespace();

        let (Some(method), Some(target), Some(version)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::MalformedRequestLine);
        };

        Ok(Self {
            method: Method::from_str(method).ok_or(ParseError::InvalidMethod)?,
            path: RequestPath::parse(target)?,
            version: version.to_string(),
        })
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.path.route(), self.version)
    }
}

/// A fully parsed request: request line, headers and form body.
///
/// The body map is empty unless the request carried a `Content-Length`.
#[derive(Debug, Clone)]
pub struct Request {
    line: RequestLine,
    headers: Headers,
    body: HashMap<String, String>,
}

impl Request {
    pub fn new(line: RequestLine, headers: Headers, body: HashMap<String, String>) -> Self {
        Self { line, headers, body }
    }

    pub fn line(&self) -> &RequestLine {
        &self.line
    }

    pub fn method(&self) -> Method {
        self.line.method
    }

    pub fn path(&self) -> &RequestPath {
        &self.line.path
    }

    /// The route path, without the query string.
    pub fn route(&self) -> &str {
        self.line.path.route()
    }

    pub fn version(&self) -> &str {
        &self.line.version
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    pub fn body(&self) -> &HashMap<String, String> {
        &self.body
    }

    pub fn body_value(&self, key: &str) -> Option<&str> {
        self.body.get(key).map(|v| v.as_str())
    }

    /// Parses the `Cookie` header on demand.
    pub fn cookies(&self) -> Result<CookieJar, ParseError> {
        CookieJar::parse(self.header("Cookie"))
    }
}

/// Builder for constructing Request objects outside the wire parser.
#[derive(Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: Headers,
    body: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(key, value);
        self
    }

    pub fn body_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Request, ParseError> {
        let line = RequestLine {
            method: self.method.ok_or(ParseError::MalformedRequestLine)?,
            path: RequestPath::parse(self.target.as_deref().unwrap_or("/"))?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
        };
        Ok(Request::new(line, self.headers, self.body))
    }
}
