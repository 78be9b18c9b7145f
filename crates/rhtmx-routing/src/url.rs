/// URL composition: split a URL into parts, merge query parameters, reassemble
///
/// All functions are **pure**: given same input, always produce same output.

use crate::params::Parameters;
use crate::query::{generate_query_string, parse_query_string};

/// The three parts of a URL this crate cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub base_url: &'a str,
    pub query: &'a str,
    pub hash: &'a str,
}

/// Splits a URL into base, query string and hash (zero-copy)
///
/// The hash is everything after the first `#`; the query is everything
/// between the first `?` and the hash.
///
/// # Examples
///
/// ```
/// use rhtmx_routing::url::explode_url;
///
/// let parts = explode_url("/search?q=rust#results");
/// assert_eq!(parts.base_url, "/search");
/// assert_eq!(parts.query, "q=rust");
/// assert_eq!(parts.hash, "results");
///
/// let parts = explode_url("/home");
/// assert_eq!(parts.query, "");
/// assert_eq!(parts.hash, "");
/// ```
pub fn explode_url(url: &str) -> UrlParts<'_> {
    let (rest, hash) = url.split_once('#').unwrap_or((url, ""));
    let (base_url, query) = rest.split_once('?').unwrap_or((rest, ""));

    UrlParts {
        base_url,
        query,
        hash,
    }
}

/// Shallow merge of two parameter maps; `overrides` wins on shared keys
///
/// Result order: keys of `base` in their order, then keys only present in
/// `overrides` in theirs.
pub fn merge_parameters(base: &Parameters, overrides: &Parameters) -> Parameters {
    base.iter()
        .chain(overrides.iter())
        .map(|(k, v)| (k, v.clone()))
        .collect()
}

/// Adds query parameters to a URL, keeping its existing query and hash
///
/// Existing query values are taken as raw text and encoded again when the
/// query string is regenerated, so an already-escaped `%20` becomes `%2520`.
///
/// # Examples
///
/// ```
/// use rhtmx_routing::url::add_parameters_to_url;
/// use rhtmx_routing::Parameters;
///
/// let url = add_parameters_to_url(
///     "/list?sort=asc&page=1#top",
///     &Parameters::new().with("page", 3).with("q", "a b"),
/// );
/// assert_eq!(url, "/list?sort=asc&page=3&q=a%20b#top");
/// ```
pub fn add_parameters_to_url(url: &str, parameters: &Parameters) -> String {
    let parts = explode_url(url);

    let existing = parse_query_string(parts.query);
    let query_string = generate_query_string(&merge_parameters(&existing, parameters));

    let mut result = parts.base_url.to_string();
    if !query_string.is_empty() {
        result.push('?');
        result.push_str(&query_string);
    }
    if !parts.hash.is_empty() {
        result.push('#');
        result.push_str(parts.hash);
    }
    result
}
