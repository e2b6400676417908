use thiserror::Error;

/// Umbrella error for every failure the header parser and query codec report.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("header error: {source}")]
    HeaderError {
        #[from]
        source: ParseError,
    },

    #[error("query error: {source}")]
    QueryError {
        #[from]
        source: QueryError,
    },
}

/// Failures raised while parsing a raw header block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input violated a precondition before parsing started.
    #[error("{reason}")]
    InvalidInput { reason: String },

    /// A header line had no `name: value` separator. `line` is the offending
    /// line verbatim, without its line terminator.
    #[error("Unsupported header format: {line}")]
    MalformedHeader { line: String },
}

impl ParseError {
    pub fn invalid_input<S: ToString>(str: S) -> Self {
        Self::InvalidInput { reason: str.to_string() }
    }

    pub(crate) fn whitespace_input() -> Self {
        Self::invalid_input("raw header text cannot be whitespace")
    }

    pub fn malformed_header<S: ToString>(line: S) -> Self {
        Self::MalformedHeader { line: line.to_string() }
    }
}

/// Which side a decode call defaults to when a parameter is not listed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapsePolicy {
    /// Every parameter is a list unless it is named in the collapse list.
    ArrayFirst,
    /// Every parameter is a single value unless it is named in the array list.
    ScalarFirst,
}

/// Failures raised while decoding a query string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The number of values for `name` does not fit the shape the policy demands.
    #[error("{}", conflict_message(.name, .policy))]
    CollapseConflict { name: String, policy: CollapsePolicy },
}

impl QueryError {
    pub fn collapse_conflict<S: ToString>(name: S, policy: CollapsePolicy) -> Self {
        Self::CollapseConflict { name: name.to_string(), policy }
    }
}

fn conflict_message(name: &str, policy: &CollapsePolicy) -> String {
    match policy {
        CollapsePolicy::ArrayFirst => format!("Parameter '{name}' had more than one value but in $collapsedParams"),
        CollapsePolicy::ScalarFirst => format!("Parameter '{name}' is not expected to be an array, but array given"),
    }
}
