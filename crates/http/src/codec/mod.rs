//! Parsing and encoding of HTTP text fragments
//!
//! This module holds the two stateless components of the crate. Neither depends
//! on the other; both work on borrowed input and return freshly allocated
//! values, so they can be called from any thread without coordination.
//!
//! # Components
//!
//! - Header parsing via [`header`] module:
//!   - [`parse_headers`]: raw header block to [`ParsedHeaders`](crate::protocol::ParsedHeaders)
//!
//! - Query strings via [`query`] module:
//!   - [`build_query_string`]: key/value data to a query string
//!   - [`get_query_params`]: URL to lists of values, selected names collapsed
//!   - [`get_query_params_collapsed`]: URL to single values, selected names kept as lists
//!
//! # Example
//!
//! ```
//! use micro_http_util::codec::{build_query_string, get_query_params_collapsed, parse_headers};
//! use micro_http_util::protocol::{QueryParam, QueryValue};
//!
//! let headers = parse_headers("GET /search?q=micro%20http HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
//! let target = headers.request_url().unwrap();
//!
//! let params = get_query_params_collapsed(target, &[]).unwrap();
//! assert_eq!(params["q"], QueryParam::from("micro http"));
//!
//! let query = build_query_string([("q", QueryValue::from("micro http"))]);
//! assert_eq!(query, "q=micro%20http");
//! ```

pub mod header;
pub mod query;

pub use header::parse_headers;
pub use query::{build_query_string, get_query_params, get_query_params_collapsed};
