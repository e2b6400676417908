//! Parsing utilities for HTTP-speaking clients
//!
//! This crate provides two small, stateless building blocks that clients need
//! around an HTTP exchange, without doing any network I/O itself:
//!
//! - a parser turning a raw block of header text, as read off a socket, into an
//!   ordered, structured map
//! - a query string codec that encodes key/value data into a query string and
//!   decodes a URL's query back, with explicit control over which parameters
//!   are single values and which are lists
//!
//! # Example
//!
//! ```
//! use micro_http_util::codec::{get_query_params, parse_headers};
//! use micro_http_util::protocol::{HeaderValue, QueryParam};
//!
//! let raw = "HTTP/1.1 302 Found\r\n\
//!            Location: https://example.com/next?page=2&tag=a&tag=b\r\n\
//!            Set-Cookie: session=1\r\n\
//!            Set-Cookie: theme=dark\r\n\
//!            \r\n";
//!
//! let headers = parse_headers(raw).unwrap();
//! assert_eq!(headers.response_code(), Some(302));
//! assert_eq!(headers.response_status(), Some("Found"));
//! assert_eq!(headers.get("Set-Cookie"), Some(&HeaderValue::from(vec!["session=1", "theme=dark"])));
//!
//! let location = headers.get("Location").and_then(HeaderValue::as_str).unwrap();
//! let params = get_query_params(location, &["page"]).unwrap();
//! assert_eq!(params["page"], QueryParam::from("2"));
//! assert_eq!(params["tag"], QueryParam::from(vec!["a", "b"]));
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: the parsing and encoding operations
//! - [`protocol`]: value types, errors and [`protocol::HttpException`]
//!
//! # Error Handling
//!
//! Every operation reports failures synchronously through `Result`:
//!
//! - [`protocol::ParseError`]: whitespace-only input, or a header line without `:`
//! - [`protocol::QueryError`]: a parameter whose value count does not fit the
//!   requested collapse policy
//! - [`protocol::CodecError`]: umbrella over both
//!
//! A URL that cannot be parsed, or carries no query, is not an error: it decodes
//! to an empty map. To surface a failure across a service boundary, wrap it in
//! [`protocol::HttpException`], e.g. with [`protocol::HttpException::bad_request`].
//!
//! # Logging
//!
//! Events are emitted through `tracing` at `trace` and `debug` level. The crate
//! never installs a subscriber.
//!
//! # Limitations
//!
//! - No folded (continuation) header lines
//! - No validation of methods or status code ranges
//! - Only the query component of a URL is interpreted

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

pub use codec::{build_query_string, get_query_params, get_query_params_collapsed, parse_headers};
