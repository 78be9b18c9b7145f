/// Placeholder pattern parsing
///
/// A pattern is a template with a single `%s` marker standing for the
/// parameter name, e.g. `{%s}` or `:%s`. It is stored as the literal text
/// before and after the marker.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RoutingError};

/// Marker standing for the parameter name inside a pattern
pub const MARKER: &str = "%s";

/// Pre-defined aliases accepted in place of a pattern
pub const PREDEFINED_PATTERNS: &[(&str, &str)] = &[("symfony", "{%s}"), ("angular", ":%s")];

/// Syntactic convention used to recognise placeholders in a route path
///
/// # Examples
///
/// ```
/// use rhtmx_routing::PlaceholderPattern;
///
/// // Aliases
/// let symfony = PlaceholderPattern::parse("symfony").unwrap();
/// assert_eq!(symfony.to_string(), "{%s}");
///
/// let angular: PlaceholderPattern = "angular".parse().unwrap();
/// assert_eq!(angular.prefix(), ":");
/// assert_eq!(angular.suffix(), "");
///
/// // Custom
/// let custom = PlaceholderPattern::parse("<%s>").unwrap();
/// assert_eq!(custom.prefix(), "<");
///
/// // No marker, no alias
/// assert!(PlaceholderPattern::parse("Pattern without marker.").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceholderPattern {
    prefix: String,
    suffix: String,
}

impl PlaceholderPattern {
    /// Parses a custom pattern or resolves an alias
    ///
    /// A value containing `%s` is always treated as a custom pattern, split at
    /// its first marker. Otherwise it must name one of [`PREDEFINED_PATTERNS`].
    pub fn parse(value: &str) -> Result<Self> {
        if let Some((prefix, suffix)) = value.split_once(MARKER) {
            return Ok(Self {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            });
        }

        PREDEFINED_PATTERNS
            .iter()
            .find(|(alias, _)| *alias == value)
            .map(|(_, pattern)| Self::parse(pattern))
            .unwrap_or_else(|| Err(RoutingError::InvalidPlaceholderPattern(value.to_string())))
    }

    /// Brace-delimited placeholders: `{name}`
    pub fn symfony() -> Self {
        Self {
            prefix: "{".to_string(),
            suffix: "}".to_string(),
        }
    }

    /// Sigil-prefixed placeholders: `:name`
    pub fn angular() -> Self {
        Self {
            prefix: ":".to_string(),
            suffix: String::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Regex source for a placeholder whose name matches `name_rule`
    ///
    /// Literal pattern text is escaped; optional whitespace is allowed around
    /// the name.
    pub(crate) fn rule_source(&self, name_rule: &str) -> String {
        format!(
            r"{}\s*{}\s*{}",
            regex::escape(&self.prefix),
            name_rule,
            regex::escape(&self.suffix)
        )
    }
}

impl Default for PlaceholderPattern {
    fn default() -> Self {
        Self::symfony()
    }
}

impl FromStr for PlaceholderPattern {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PlaceholderPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, MARKER, self.suffix)
    }
}
