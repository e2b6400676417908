//! Query string decoding with two collapse policies.
//!
//! Both decoders first group every value of the URL's query by name, in
//! encounter order, then shape each group:
//!
//! - [`get_query_params`] (array first): every name stays a list, except the
//!   names passed as `collapsed_params`, which must hold exactly one value
//! - [`get_query_params_collapsed`] (scalar first): every name must hold
//!   exactly one value, except the names passed as `array_params`, which stay
//!   lists
//!
//! The query is the text after the first `?` and before any `#`; the rest of
//! the URL is not validated. A URL without a query decodes to an empty map.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::protocol::{CollapsePolicy, ParsedQuery, QueryError, QueryParam};

/// Decodes the query of `url`, keeping every parameter as a list unless it is
/// named in `collapsed_params`.
///
/// Names in `collapsed_params` that do not occur in the query are ignored.
///
/// # Errors
///
/// [`QueryError::CollapseConflict`] when a name in `collapsed_params` occurs
/// more than once.
///
/// # Example
///
/// ```
/// use micro_http_util::codec::get_query_params;
/// use micro_http_util::protocol::QueryParam;
///
/// let params = get_query_params("http://foo.com/bar/?stuff=yeah&moreStuff=mhmm", &["stuff", "notThere"]).unwrap();
/// assert_eq!(params["stuff"], QueryParam::from("yeah"));
/// assert_eq!(params["moreStuff"], QueryParam::from(vec!["mhmm"]));
/// ```
pub fn get_query_params(url: &str, collapsed_params: &[&str]) -> Result<ParsedQuery, QueryError> {
    collapse(group_query_values(url), collapsed_params, CollapsePolicy::ArrayFirst)
}

/// Decodes the query of `url`, collapsing every parameter to a single value
/// unless it is named in `array_params`.
///
/// # Errors
///
/// [`QueryError::CollapseConflict`] when a name not in `array_params` occurs
/// more than once.
///
/// # Example
///
/// ```
/// use micro_http_util::codec::get_query_params_collapsed;
/// use micro_http_util::protocol::QueryParam;
///
/// let params = get_query_params_collapsed("http://foo.com/bar/?boo=1&foo=bar&boo=2", &["boo"]).unwrap();
/// assert_eq!(params["boo"], QueryParam::from(vec!["1", "2"]));
/// assert_eq!(params["foo"], QueryParam::from("bar"));
/// ```
pub fn get_query_params_collapsed(url: &str, array_params: &[&str]) -> Result<ParsedQuery, QueryError> {
    collapse(group_query_values(url), array_params, CollapsePolicy::ScalarFirst)
}

/// Applies `policy` to every group. `listed` holds the names that are the
/// exception to the policy's default shape.
fn collapse(
    groups: IndexMap<String, Vec<String>>,
    listed: &[&str],
    policy: CollapsePolicy,
) -> Result<ParsedQuery, QueryError> {
    let mut params = ParsedQuery::with_capacity(groups.len());

    for (name, mut values) in groups {
        let wants_single = match policy {
            CollapsePolicy::ArrayFirst => listed.contains(&name.as_str()),
            CollapsePolicy::ScalarFirst => !listed.contains(&name.as_str()),
        };

        let param = if wants_single {
            if values.len() > 1 {
                return Err(QueryError::collapse_conflict(name, policy));
            }
            // a group is never empty
            QueryParam::Single(values.pop().unwrap_or_default())
        } else {
            QueryParam::Multi(values)
        };

        params.insert(name, param);
    }

    Ok(params)
}

/// Groups the decoded values of `url`'s query by name, in first-occurrence order.
fn group_query_values(url: &str) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

    let Some(query) = extract_query(url) else {
        return groups;
    };

    let pairs = match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            debug!(cause = %e, "undecodable query string, treat as empty");
            return groups;
        }
    };

    for (name, value) in pairs {
        groups.entry(name).or_default().push(value);
    }

    trace!(pairs = groups.values().map(Vec::len).sum::<usize>(), names = groups.len(), "grouped query values");
    groups
}

/// The text between the first `?` and the fragment, `None` when there is no
/// `?` or nothing follows it.
fn extract_query(url: &str) -> Option<&str> {
    let without_fragment = url.split_once('#').map_or(url, |(before, _)| before);

    match without_fragment.split_once('?') {
        Some((_, query)) if !query.is_empty() => Some(query),
        _ => {
            debug!("url has no query component");
            None
        }
    }
}
