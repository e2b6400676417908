//! Status-code-carrying error for reporting failures across a service boundary.
//!
//! Parsing and decoding never build an [`HttpException`] themselves; callers
//! wrap a [`ParseError`](super::ParseError) or [`QueryError`](super::QueryError)
//! in one when the failure has to reach a client.

use std::error::Error;
use std::fmt;

use http::StatusCode;

type BoxError = Box<dyn Error + Send + Sync>;

const DEFAULT_MESSAGE: &str = "Application Error";
const DEFAULT_HTTP_STATUS_CODE: u16 = 500;

/// An error associated with an HTTP status code.
///
/// Besides the main message it carries an optional, separate message meant for
/// end users (free of sensitive details). When no user message is given the
/// main message is reused.
#[derive(Debug)]
pub struct HttpException {
    message: String,
    http_status_code: u16,
    code: i64,
    source: Option<BoxError>,
    user_message: Option<String>,
}

impl HttpException {
    /// Creates an exception with the given message, status 500 and code 0.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), http_status_code: DEFAULT_HTTP_STATUS_CODE, code: 0, source: None, user_message: None }
    }

    /// Wraps a parse or decode failure as a `400 Bad Request`.
    pub fn bad_request<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(error.to_string()).with_http_status_code(StatusCode::BAD_REQUEST.as_u16()).with_source(error)
    }

    /// Sets the http status code. The number is stored as given, it is not
    /// checked against the valid status range.
    pub fn with_http_status_code(mut self, http_status_code: u16) -> Self {
        self.http_status_code = http_status_code;
        self
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        self.source = Some(source.into());
        self
    }

    pub fn with_user_message<S: Into<String>>(mut self, user_message: S) -> Self {
        self.user_message = Some(user_message.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    /// The status code as a typed [`StatusCode`], `None` when it is outside `100..=999`.
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.http_status_code).ok()
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    /// The user facing message, falling back to [`message`](Self::message).
    pub fn user_message(&self) -> &str {
        self.user_message.as_deref().unwrap_or(&self.message)
    }
}

impl Default for HttpException {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

impl fmt::Display for HttpException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for HttpException {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
