//! Parser turning a raw block of HTTP header text into [`ParsedHeaders`].
//!
//! The block is what a client reads off a socket before the body: an optional
//! start line followed by `name: value` fields, separated by `\r\n` or `\n`.
//!
//! # Start line
//!
//! Only the first line is checked for a start line:
//!
//! - `HTTP/<major>.<minor> <code> <reason>` becomes `Response Code` (as an
//!   integer) and `Response Status`
//! - `<method> <target> HTTP/<major>.<minor>` becomes `Request Method` and
//!   `Request Url`
//!
//! Anything else is parsed as a regular header field.
//!
//! # Fields
//!
//! Each field is split on its first `:`; the value is trimmed, the name is kept
//! byte-for-byte. A name seen more than once collects all of its values, in
//! order, into a [`HeaderValue::List`](crate::protocol::HeaderValue::List).
//! Blank lines are skipped. Continuation lines are not supported and fail like
//! any other line without a `:`.

use tracing::{debug, trace};

use crate::ensure;
use crate::protocol::header::{REQUEST_METHOD, REQUEST_URL, RESPONSE_CODE, RESPONSE_STATUS};
use crate::protocol::{ParseError, ParsedHeaders};

const HTTP_VERSION_PREFIX: &str = "HTTP/";

/// Parses a raw header block.
///
/// # Errors
///
/// - [`ParseError::InvalidInput`] if `raw_headers` is empty or only whitespace
/// - [`ParseError::MalformedHeader`] for the first line that is neither a start
///   line, blank, nor a `name: value` field
///
/// # Example
///
/// ```
/// use micro_http_util::codec::parse_headers;
/// use micro_http_util::protocol::HeaderValue;
///
/// let headers = parse_headers("HTTP/1.1 200 OK\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\n").unwrap();
/// assert_eq!(headers.response_code(), Some(200));
/// assert_eq!(headers.get("Set-Cookie"), Some(&HeaderValue::from(vec!["a=1", "b=2"])));
/// ```
pub fn parse_headers(raw_headers: &str) -> Result<ParsedHeaders, ParseError> {
    ensure!(!raw_headers.trim().is_empty(), ParseError::whitespace_input());

    let line_count = raw_headers.bytes().filter(|b| *b == b'\n').count() + 1;
    let mut headers = ParsedHeaders::with_capacity(line_count);

    let mut lines = raw_headers.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

    if let Some(first_line) = lines.next() {
        match StartLine::parse(first_line) {
            Some(StartLine::Status { code, reason }) => {
                trace!(code, reason, "parsed response status line");
                headers.append(RESPONSE_CODE, code);
                headers.append(RESPONSE_STATUS, reason);
            }
            Some(StartLine::Request { method, target }) => {
                trace!(method, target, "parsed request line");
                headers.append(REQUEST_METHOD, method);
                headers.append(REQUEST_URL, target);
            }
            None => parse_field(first_line, &mut headers)?,
        }
    }

    for line in lines {
        parse_field(line, &mut headers)?;
    }

    debug!(entries = headers.len(), lines = line_count, "parsed raw header block");
    Ok(headers)
}

/// Parses one `name: value` line into `headers`, skipping blank lines.
fn parse_field(line: &str, headers: &mut ParsedHeaders) -> Result<(), ParseError> {
    if line.trim().is_empty() {
        return Ok(());
    }

    let (name, value) = line.split_once(':').ok_or_else(|| ParseError::malformed_header(line))?;
    headers.append(name, value.trim());
    Ok(())
}

/// The first line of a message, when it is a status or request line.
#[derive(Debug, PartialEq, Eq)]
enum StartLine<'a> {
    Status { code: u16, reason: &'a str },
    Request { method: &'a str, target: &'a str },
}

impl<'a> StartLine<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        Self::parse_status(line).or_else(|| Self::parse_request(line))
    }

    /// `HTTP/<digits>.<digits> <3 digits>[ <reason>]`
    fn parse_status(line: &'a str) -> Option<Self> {
        let (version, rest) = line.split_once(' ')?;
        if !is_http_version(version) {
            return None;
        }

        let (code, reason) = rest.split_once(' ').unwrap_or((rest, ""));
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let code = code.parse().ok()?;
        Some(StartLine::Status { code, reason: reason.trim() })
    }

    /// `<method> <target> HTTP/<digits>.<digits>`, the method being ASCII letters
    fn parse_request(line: &'a str) -> Option<Self> {
        let mut parts = line.split(' ');
        let (method, target, version) = (parts.next()?, parts.next()?, parts.next()?);
        let is_method = !method.is_empty() && method.bytes().all(|b| b.is_ascii_alphabetic());
        if parts.next().is_some() || !is_method || target.is_empty() || !is_http_version(version) {
            return None;
        }

        Some(StartLine::Request { method, target })
    }
}

fn is_http_version(version: &str) -> bool {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    version
        .strip_prefix(HTTP_VERSION_PREFIX)
        .and_then(|number| number.split_once('.'))
        .is_some_and(|(major, minor)| is_digits(major) && is_digits(minor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HeaderValue;
    use indoc::indoc;

    #[test]
    fn single_field() {
        let headers = parse_headers("Content-Type: text/json").unwrap();
        let expected: ParsedHeaders = [("Content-Type", "text/json")].into_iter().collect();
        assert_eq!(headers, expected);
    }

    #[test]
    fn malformed_first_line() {
        let error = parse_headers("&some\r\nbad+headers").unwrap_err();
        assert_eq!(error, ParseError::malformed_header("&some"));
        assert_eq!(error.to_string(), "Unsupported header format: &some");
    }

    #[test]
    fn malformed_later_line_is_reported_verbatim() {
        let error = parse_headers("Host: example.com\r\n  no separator here \r\nAccept: */*").unwrap_err();
        assert_eq!(error.to_string(), "Unsupported header format:   no separator here ");
    }

    #[test]
    fn whitespace_input() {
        for raw in ["", " ", "\r\n", " \t\n  "] {
            let error = parse_headers(raw).unwrap_err();
            assert_eq!(error, ParseError::invalid_input("raw header text cannot be whitespace"));
        }
    }

    #[test]
    fn response_with_repeated_fields() {
        let raw = "HTTP/1.1 200 OK\r\n\ncontent-type: text/html; charset=UTF-8\r\n\nServer: Funky/1.0\r\n\n\
                   Set-Cookie: foo=bar\r\n\nSet-Cookie: baz=quux\r\n\nSet-Cookie: key=value\r\n";

        let headers = parse_headers(raw).unwrap();

        let keys: Vec<_> = headers.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Response Code", "Response Status", "content-type", "Server", "Set-Cookie"]);

        assert_eq!(headers.get(RESPONSE_CODE), Some(&HeaderValue::Code(200)));
        assert_eq!(headers.response_status(), Some("OK"));
        assert_eq!(headers.get("content-type"), Some(&HeaderValue::from("text/html; charset=UTF-8")));
        assert_eq!(headers.get("Server"), Some(&HeaderValue::from("Funky/1.0")));
        assert_eq!(headers.get("Set-Cookie"), Some(&HeaderValue::from(vec!["foo=bar", "baz=quux", "key=value"])));
    }

    #[test]
    fn request_line() {
        let raw = indoc! {r##"
        GET /file.xml HTTP/1.1
        Host: www.example.com
        Accept: */*

        "##};

        let headers = parse_headers(raw).unwrap();

        let expected: ParsedHeaders = [
            (REQUEST_METHOD, "GET"),
            (REQUEST_URL, "/file.xml"),
            ("Host", "www.example.com"),
            ("Accept", "*/*"),
        ]
        .into_iter()
        .collect();
        assert_eq!(headers, expected);
        assert_eq!(headers.request_method(), Some("GET"));
        assert_eq!(headers.request_url(), Some("/file.xml"));
        assert_eq!(headers.response_code(), None);
    }

    #[test]
    fn request_line_with_query_target() {
        let raw = indoc! {r##"
        GET /index/?a=1&b=2&a=3 HTTP/1.0
        Host: 127.0.0.1:8080
        "##};

        let headers = parse_headers(raw).unwrap();
        assert_eq!(headers.request_url(), Some("/index/?a=1&b=2&a=3"));
        assert_eq!(headers.get("Host").and_then(HeaderValue::as_str), Some("127.0.0.1:8080"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let headers = parse_headers("Accept: a\nACCEPT: b\naccept: c\nAccept: d").unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("Accept"), Some(&HeaderValue::from(vec!["a", "d"])));
        assert_eq!(headers.get("ACCEPT").and_then(HeaderValue::as_str), Some("b"));
    }

    #[test]
    fn value_is_split_on_first_colon_and_trimmed() {
        let headers = parse_headers("Host:   127.0.0.1:8080  \r\nX-Empty:\r\n").unwrap();
        assert_eq!(headers.get("Host").and_then(HeaderValue::as_str), Some("127.0.0.1:8080"));
        assert_eq!(headers.get("X-Empty").and_then(HeaderValue::as_str), Some(""));
    }

    #[test]
    fn start_line_only_counts_on_first_line() {
        let error = parse_headers("Host: a\r\nHTTP/1.1 200 OK\r\n").unwrap_err();
        assert_eq!(error.to_string(), "Unsupported header format: HTTP/1.1 200 OK");
    }

    #[test]
    fn status_line_shapes() {
        assert_eq!(
            StartLine::parse("HTTP/1.1 404 Not Found"),
            Some(StartLine::Status { code: 404, reason: "Not Found" })
        );
        assert_eq!(StartLine::parse("HTTP/10.25 204"), Some(StartLine::Status { code: 204, reason: "" }));
        assert_eq!(StartLine::parse("HTTP/1.1 20 OK"), None);
        assert_eq!(StartLine::parse("HTTP/1.1 2000 OK"), None);
        assert_eq!(StartLine::parse("HTTP/2 200 OK"), None);
        assert_eq!(StartLine::parse("HTTPS/1.1 200 OK"), None);
    }

    #[test]
    fn request_line_shapes() {
        assert_eq!(
            StartLine::parse("POST /submit HTTP/1.1"),
            Some(StartLine::Request { method: "POST", target: "/submit" })
        );
        assert_eq!(StartLine::parse("GET /a b HTTP/1.1"), None);
        assert_eq!(StartLine::parse("GET /a HTTP/x.1"), None);
        assert_eq!(StartLine::parse("GET  HTTP/1.1"), None);
        assert_eq!(StartLine::parse("X-Via: proxy HTTP/1.1"), None);
        assert_eq!(StartLine::parse("M-SEARCH * HTTP/1.1"), None);
    }

    #[test]
    fn field_shaped_like_request_line_is_a_field() {
        let headers = parse_headers("X-Via: proxy HTTP/1.1\r\nHost: a\r\n").unwrap();
        assert_eq!(headers.request_method(), None);
        assert_eq!(headers.get("X-Via").and_then(HeaderValue::as_str), Some("proxy HTTP/1.1"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn unusual_methods_are_not_validated() {
        let headers = parse_headers("BREW /pot HTTP/1.1\r\n").unwrap();
        assert_eq!(headers.request_method(), Some("BREW"));
        assert_eq!(headers.len(), 2);
    }
}
