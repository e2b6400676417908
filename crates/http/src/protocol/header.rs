//! Structured result of parsing a raw header block.
//!
//! [`ParsedHeaders`] keeps header names exactly as written and preserves the
//! order in which each distinct name first appeared. The start line of the
//! block, when present, is surfaced as synthesized entries under the
//! [`RESPONSE_CODE`], [`RESPONSE_STATUS`], [`REQUEST_METHOD`] and
//! [`REQUEST_URL`] keys.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::{Iter, Keys};
use serde::Serialize;

/// Key holding the numeric status code of a response status line.
pub const RESPONSE_CODE: &str = "Response Code";
/// Key holding the reason phrase of a response status line.
pub const RESPONSE_STATUS: &str = "Response Status";
/// Key holding the method of a request line.
pub const REQUEST_METHOD: &str = "Request Method";
/// Key holding the target of a request line.
pub const REQUEST_URL: &str = "Request Url";

/// The value stored under a header name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    /// A header seen once.
    Text(String),
    /// The status code of a response status line.
    Code(u16),
    /// Every value of a repeated header, in encounter order.
    List(Vec<String>),
}

impl HeaderValue {
    /// Returns the text of a single-valued header.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the status code synthesized from a response status line.
    pub fn as_code(&self) -> Option<u16> {
        match self {
            HeaderValue::Code(code) => Some(*code),
            _ => None,
        }
    }

    /// Returns the values of a repeated header.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            HeaderValue::List(values) => Some(values),
            _ => None,
        }
    }

    /// Returns every value as text, a single value yielding a one-element list.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            HeaderValue::Text(text) => vec![text.clone()],
            HeaderValue::Code(code) => vec![code.to_string()],
            HeaderValue::List(values) => values.clone(),
        }
    }

    /// Adds another occurrence of the same header, turning a single value into a list.
    pub(crate) fn push(&mut self, value: String) {
        if let HeaderValue::List(values) = self {
            values.push(value);
            return;
        }
        let first = self.to_string();
        *self = HeaderValue::List(vec![first, value]);
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Text(text) => f.write_str(text),
            HeaderValue::Code(code) => write!(f, "{code}"),
            HeaderValue::List(values) => f.write_str(&values.join(", ")),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Text(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Text(value)
    }
}

impl From<u16> for HeaderValue {
    fn from(value: u16) -> Self {
        HeaderValue::Code(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for HeaderValue {
    fn from(values: Vec<S>) -> Self {
        HeaderValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Ordered mapping of header name to [`HeaderValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedHeaders {
    inner: IndexMap<String, HeaderValue>,
}

impl ParsedHeaders {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { inner: IndexMap::with_capacity(capacity) }
    }

    /// Stores `value` under `name`, appending to the existing entry when the
    /// name was seen before.
    pub(crate) fn append<V: Into<HeaderValue>>(&mut self, name: &str, value: V) {
        let value = value.into();
        match self.inner.get_mut(name) {
            Some(existing) => {
                for text in value.to_vec() {
                    existing.push(text);
                }
            }
            None => {
                self.inner.insert(name.to_string(), value);
            }
        }
    }

    /// Looks up `name`, matched byte-for-byte.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.inner.get(name)
    }

    /// Whether `name` occurred in the block, matched byte-for-byte.
    pub fn contains_key(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Number of distinct names, synthesized start line entries included.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no entry was parsed.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates entries in first-occurrence order.
    pub fn iter(&self) -> Iter<'_, String, HeaderValue> {
        self.inner.iter()
    }

    /// Iterates names in first-occurrence order.
    pub fn keys(&self) -> Keys<'_, String, HeaderValue> {
        self.inner.keys()
    }

    /// The status code of the response status line, if the block started with one.
    pub fn response_code(&self) -> Option<u16> {
        self.get(RESPONSE_CODE).and_then(HeaderValue::as_code)
    }

    /// The reason phrase of the response status line, if the block started with one.
    pub fn response_status(&self) -> Option<&str> {
        self.get(RESPONSE_STATUS).and_then(HeaderValue::as_str)
    }

    /// The method of the request line, if the block started with one.
    pub fn request_method(&self) -> Option<&str> {
        self.get(REQUEST_METHOD).and_then(HeaderValue::as_str)
    }

    /// The target of the request line, if the block started with one.
    pub fn request_url(&self) -> Option<&str> {
        self.get(REQUEST_URL).and_then(HeaderValue::as_str)
    }

    /// Consumes the wrapper and returns the ordered map.
    pub fn into_inner(self) -> IndexMap<String, HeaderValue> {
        self.inner
    }
}

impl AsRef<IndexMap<String, HeaderValue>> for ParsedHeaders {
    fn as_ref(&self) -> &IndexMap<String, HeaderValue> {
        &self.inner
    }
}

impl<'a> IntoIterator for &'a ParsedHeaders {
    type Item = (&'a String, &'a HeaderValue);
    type IntoIter = Iter<'a, String, HeaderValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl IntoIterator for ParsedHeaders {
    type Item = (String, HeaderValue);
    type IntoIter = indexmap::map::IntoIter<String, HeaderValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ParsedHeaders
where
    K: AsRef<str>,
    V: Into<HeaderValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = ParsedHeaders::default();
        for (name, value) in iter {
            headers.append(name.as_ref(), value);
        }
        headers
    }
}
