use crate::http::headers::Headers;
use crate::http::writer::serialize_response;

/// HTTP status codes the server emits.
///
/// Anything outside this set is rejected by [`StatusCode::from_u16`], so a
/// response can never carry a code without a reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found
    Found,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Found.as_u16(), 302);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            302 => Some(StatusCode::Found),
            400 => Some(StatusCode::BadRequest),
            401 => Some(StatusCode::Unauthorized),
            404 => Some(StatusCode::NotFound),
            405 => Some(StatusCode::MethodNotAllowed),
            500 => Some(StatusCode::InternalServerError),
            _ => None,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("response has no status code")]
    MissingStatus,
    #[error("unknown status code {0}")]
    UnknownStatus(u16),
}

/// A response under assembly.
///
/// Headers are written in the order they were first set. A response without
/// a body serializes as the header block and a blank line, nothing more.
#[derive(Debug, Clone, Default)]
pub struct Response {
    status: Option<StatusCode>,
    headers: Headers,
    body: Option<Vec<u8>>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    /// Sets the status from a numeric code, rejecting codes without a known
    /// reason phrase.
    pub fn set_status_code(&mut self, code: u16) -> Result<(), ResponseError> {
        let status = StatusCode::from_u16(code).ok_or(ResponseError::UnknownStatus(code))?;
        self.status = Some(status);
        Ok(())
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = Some(body.into());
    }

    /// Adds or overwrites a header. Numeric values are written in decimal.
    pub fn put_header(&mut self, name: impl Into<String>, value: impl ToString) {
        self.headers.set(name, value.to_string());
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Serializes to wire bytes under the given protocol version.
    pub fn serialize(&self, version: &str) -> Result<Vec<u8>, ResponseError> {
        serialize_response(self, version)
    }

    /// A bodiless `302 Found` pointing at `location`.
    pub fn redirect(location: &str) -> Self {
        let mut response = Self::with_status(StatusCode::Found);
        response.put_header("Location", location);
        response.put_header("Content-Length", 0);
        response
    }

    /// A plain-text response whose body is `"<code> <reason>"`.
    pub fn plain(status: StatusCode) -> Self {
        let body = format!("{} {}", status.as_u16(), status.reason_phrase());
        let mut response = Self::with_status(status);
        response.put_header("Content-Length", body.len());
        response.put_header("Content-Type", "text/plain");
        response.set_body(body);
        response
    }

    pub fn bad_request() -> Self {
        Self::plain(StatusCode::BadRequest)
    }

    pub fn not_found() -> Self {
        Self::plain(StatusCode::NotFound)
    }

    pub fn method_not_allowed() -> Self {
        Self::plain(StatusCode::MethodNotAllowed)
    }
}
