//! Query string encoding.
//!
//! Keys and values are percent-encoded with the RFC 3986 unreserved set left
//! as is; everything else, space included, becomes `%XX`. That differs from
//! `application/x-www-form-urlencoded`, which writes a space as `+` and leaves
//! `*` alone.

use std::borrow::Borrow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::trace;

use crate::protocol::{QueryValue, Scalar};

/// Everything except `ALPHA / DIGIT / "-" / "." / "_" / "~"`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Builds a query string (without the leading `?`) from `data`.
///
/// Entries are written in iteration order. A [`QueryValue::List`] repeats its
/// key once per element and writes nothing when empty. Booleans are written as
/// `true`/`false`.
///
/// # Example
///
/// ```
/// use micro_http_util::codec::build_query_string;
/// use micro_http_util::protocol::QueryValue;
///
/// let query = build_query_string([
///     ("param1", QueryValue::from(["value", "another value"])),
///     ("param2", QueryValue::from("a value")),
/// ]);
/// assert_eq!(query, "param1=value&param1=another%20value&param2=a%20value");
/// ```
pub fn build_query_string<I, K, V>(data: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Borrow<QueryValue>,
{
    let mut query = String::new();

    for (key, value) in data {
        let key = encode_component(key.as_ref());
        match value.borrow() {
            QueryValue::Scalar(scalar) => push_pair(&mut query, &key, scalar),
            QueryValue::List(scalars) => {
                for scalar in scalars {
                    push_pair(&mut query, &key, scalar);
                }
            }
        }
    }

    trace!(len = query.len(), "built query string");
    query
}

fn push_pair(query: &mut String, encoded_key: &str, scalar: &Scalar) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(encoded_key);
    query.push('=');
    match scalar {
        Scalar::Text(text) => query.push_str(&encode_component(text)),
        other => query.push_str(&encode_component(&other.to_string())),
    }
}

fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string()
}
