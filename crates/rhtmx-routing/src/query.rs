/// Query-string codec
///
/// Pure functions converting between `key=value&...` strings and
/// [`Parameters`]. Parsing keeps values as raw text; generation encodes each
/// value with the scalar rule from [`Value::to_url_component`].

use crate::params::Parameters;
use crate::value::Value;

/// Parses a query string into ordered parameters (pure function)
///
/// # Rules
///
/// - Input is trimmed; an empty string yields an empty map
/// - Parts are split on `&`, trimmed, and skipped when empty
/// - Key and value are separated by the first `=` only
/// - Parts with an empty key are skipped
/// - A part without `=` gets an empty value
///
/// # Examples
///
/// ```
/// use rhtmx_routing::query::parse_query_string;
/// use rhtmx_routing::Value;
///
/// let params = parse_query_string("a=1& flag &token=x=y");
/// assert_eq!(params.get("a"), Some(&Value::from("1")));
/// assert_eq!(params.get("flag"), Some(&Value::from("")));
/// assert_eq!(params.get("token"), Some(&Value::from("x=y")));
/// ```
pub fn parse_query_string(raw: &str) -> Parameters {
    let raw = raw.trim();
    if raw.is_empty() {
        return Parameters::new();
    }

    raw.split('&')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_string(), Value::from(value)))
        })
        .collect()
}

/// Generates a query string from parameters (pure function)
///
/// Values that encode to an empty string are emitted as bare keys, which
/// keeps flag-style parameters (`?debug`) intact.
///
/// # Examples
///
/// ```
/// use rhtmx_routing::query::generate_query_string;
/// use rhtmx_routing::{Parameters, Value};
///
/// let params = Parameters::new()
///     .with("q", "a b")
///     .with("debug", Value::Null)
///     .with("page", 2);
///
/// assert_eq!(generate_query_string(&params), "q=a%20b&debug&page=2");
/// ```
pub fn generate_query_string(parameters: &Parameters) -> String {
    parameters
        .iter()
        .map(|(key, value)| match value.to_url_component() {
            encoded if encoded.is_empty() => key.to_string(),
            encoded => format!("{}={}", key, encoded),
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_empty_parts_and_keys() {
        let params = parse_query_string(" &&=orphan& a = 1 &");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some(&Value::from(" 1")));
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(parse_query_string("   ").is_empty());
    }

    #[test]
    fn test_parse_repeated_key_last_wins() {
        let params = parse_query_string("a=1&b=2&a=3");
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&Value::from("3")));
    }

    #[test]
    fn test_generate_empty() {
        assert_eq!(generate_query_string(&Parameters::new()), "");
    }

    #[test]
    fn test_generate_booleans() {
        let params = Parameters::new().with("on", true).with("off", false);
        assert_eq!(generate_query_string(&params), "on=1&off=0");
    }
}
