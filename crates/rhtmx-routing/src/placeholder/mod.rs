//! Placeholder engine: extraction and substitution of route parameters
//!
//! The engine owns the active [`PlaceholderPattern`] and its compiled
//! extraction rule. Substitution rules are built per parameter name.
//!
//! Rules built from a pattern:
//! - extraction: `prefix \s*(.+?)\s* suffix` followed by `/` or end of path
//! - substitution: `prefix \s*NAME\s* suffix`

pub mod pattern;

pub use pattern::{PlaceholderPattern, MARKER, PREDEFINED_PATTERNS};

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::trace;

use crate::error::{Result, RoutingError};
use crate::params::Parameters;
use crate::route::RouteDefinition;

static SYMFONY_EXTRACTION_RULE: Lazy<Regex> = Lazy::new(|| {
    extraction_rule(&PlaceholderPattern::symfony()).expect("symfony placeholder rule is valid")
});

fn extraction_rule(pattern: &PlaceholderPattern) -> Result<Regex> {
    Ok(Regex::new(&format!("{}(?:/|$)", pattern.rule_source("(.+?)")))?)
}

/// Extracts placeholder names from a path under the given pattern (pure function)
///
/// Names are trimmed and returned in order of appearance. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use rhtmx_routing::placeholder::extract_parameters_from_route_path;
/// use rhtmx_routing::PlaceholderPattern;
///
/// let params = extract_parameters_from_route_path(
///     "/user/{userId}/service/{ serviceId }",
///     &PlaceholderPattern::symfony(),
/// ).unwrap();
/// assert_eq!(params, vec!["userId", "serviceId"]);
///
/// let params = extract_parameters_from_route_path(
///     "/user/:userId",
///     &PlaceholderPattern::angular(),
/// ).unwrap();
/// assert_eq!(params, vec!["userId"]);
/// ```
pub fn extract_parameters_from_route_path(path: &str, pattern: &PlaceholderPattern) -> Result<Vec<String>> {
    Ok(scan(&extraction_rule(pattern)?, path))
}

fn scan(rule: &Regex, path: &str) -> Vec<String> {
    rule.captures_iter(path)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().trim().to_string())
        .collect()
}

#[derive(Debug, Clone)]
pub struct PlaceholderEngine {
    pattern: PlaceholderPattern,
    extraction_rule: Regex,
}

impl PlaceholderEngine {
    /// Engine using the brace-delimited `{%s}` convention
    pub fn new() -> Self {
        Self {
            pattern: PlaceholderPattern::symfony(),
            extraction_rule: SYMFONY_EXTRACTION_RULE.clone(),
        }
    }

    pub fn with_pattern(pattern: PlaceholderPattern) -> Result<Self> {
        let extraction_rule = extraction_rule(&pattern)?;
        Ok(Self {
            pattern,
            extraction_rule,
        })
    }

    pub fn pattern(&self) -> &PlaceholderPattern {
        &self.pattern
    }

    /// Replaces the active pattern; on error the engine is left unchanged
    pub fn set_pattern(&mut self, pattern: PlaceholderPattern) -> Result<()> {
        self.extraction_rule = extraction_rule(&pattern)?;
        self.pattern = pattern;
        Ok(())
    }

    pub fn extract_parameters(&self, path: &str) -> Vec<String> {
        scan(&self.extraction_rule, path)
    }

    /// Rule matching every placeholder for `parameter_name`, whitespace-tolerant
    pub fn build_substitution_rule(&self, parameter_name: &str) -> Result<Regex> {
        Ok(Regex::new(&self.pattern.rule_source(&regex::escape(parameter_name)))?)
    }

    /// Substitutes every declared parameter of `route` with its encoded input value
    ///
    /// Parameters are processed in declaration order; the first one missing
    /// from `inputs` aborts with [`RoutingError::MissingParameter`]. Each
    /// placeholder is replaced everywhere it occurs in the path.
    pub fn substitute(&self, route_name: &str, route: &RouteDefinition, inputs: &Parameters) -> Result<String> {
        route
            .parameters()
            .iter()
            .try_fold(route.path().to_string(), |path, parameter| {
                let value = inputs.get(parameter).ok_or_else(|| RoutingError::MissingParameter {
                    parameter: parameter.clone(),
                    route: route_name.to_string(),
                })?;

                let encoded = value.to_url_component();
                trace!(route = route_name, parameter = %parameter, value = %encoded, "substituting placeholder");

                Ok(self
                    .build_substitution_rule(parameter)?
                    .replace_all(&path, NoExpand(&encoded))
                    .into_owned())
            })
    }
}

impl Default for PlaceholderEngine {
    fn default() -> Self {
        Self::new()
    }
}
