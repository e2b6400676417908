//! Value types for the query string codec.
//!
//! Encoding takes [`QueryValue`]s, each either a single [`Scalar`] or a list of
//! them. Decoding produces a [`ParsedQuery`] whose entries are [`QueryParam`]s;
//! whether an entry is single or multi depends on the collapse policy of the
//! decode call.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Encode input: parameter name to value, iterated in insertion order.
pub type QueryData = IndexMap<String, QueryValue>;

/// Decode output: parameter name to its value(s), in first-occurrence order.
pub type ParsedQuery = IndexMap<String, QueryParam>;

/// A single value to encode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    /// Encoded as the literal `true` / `false`.
    Bool(bool),
    Int(i64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Bool(flag) => write!(f, "{flag}"),
            Scalar::Int(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

/// A value to encode under one key: a scalar or a list repeating the key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

macro_rules! scalar_query_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_query_value!(Scalar, &str, String, bool, i64, i32, u32);

impl<T: Into<Scalar>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        QueryValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for QueryValue {
    fn from(values: [T; N]) -> Self {
        QueryValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// A decoded parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryParam {
    Single(String),
    Multi(Vec<String>),
}

impl QueryParam {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            QueryParam::Single(value) => Some(value),
            QueryParam::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            QueryParam::Single(_) => None,
            QueryParam::Multi(values) => Some(values),
        }
    }

    /// Every value regardless of shape.
    pub fn values(&self) -> &[String] {
        match self {
            QueryParam::Single(value) => std::slice::from_ref(value),
            QueryParam::Multi(values) => values,
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            QueryParam::Single(value) => vec![value],
            QueryParam::Multi(values) => values,
        }
    }
}

impl From<&str> for QueryParam {
    fn from(value: &str) -> Self {
        QueryParam::Single(value.to_string())
    }
}

impl<S: Into<String>> From<Vec<S>> for QueryParam {
    fn from(values: Vec<S>) -> Self {
        QueryParam::Multi(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::from(false).to_string(), "false");
        assert_eq!(Scalar::from(true).to_string(), "true");
        assert_eq!(Scalar::from(-42i64).to_string(), "-42");
        assert_eq!(Scalar::from("plain").to_string(), "plain");
    }

    #[test]
    fn values_view_both_shapes() {
        let single = QueryParam::from("yeah");
        let multi = QueryParam::from(vec!["", "jazz"]);

        assert_eq!(single.values(), ["yeah"]);
        assert_eq!(multi.values(), ["", "jazz"]);
        assert_eq!(single.as_multi(), None);
        assert_eq!(multi.into_vec(), vec!["".to_string(), "jazz".to_string()]);
    }

    #[test]
    fn serializes_untagged() {
        let mut parsed = ParsedQuery::new();
        parsed.insert("boo".to_string(), QueryParam::from(vec!["1", "2"]));
        parsed.insert("foo".to_string(), QueryParam::from("bar"));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"boo":["1","2"],"foo":"bar"}"#);
    }
}
