//! Raw header block parsing.
//!
//! - [`parse_headers`]: turns header text read off a socket into
//!   [`ParsedHeaders`](crate::protocol::ParsedHeaders)
//!   - Recognizes a leading response status line or request line
//!   - Collects repeated header names into lists, in encounter order
//!   - Keeps header names exactly as written

mod header_decoder;

pub use header_decoder::parse_headers;
