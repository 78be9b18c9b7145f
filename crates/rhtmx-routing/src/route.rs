/// Route definitions and the read-only registry view
///
/// A [`RouteDefinition`] pairs a raw path template with the placeholder
/// names extracted from it at registration time. The parameter list is
/// derived, never supplied by callers.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    path: String,
    parameters: Vec<String>,
}

impl RouteDefinition {
    pub(crate) fn new(path: String, parameters: Vec<String>) -> Self {
        Self { path, parameters }
    }

    /// Raw path template, e.g. `/user/{userId}`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Placeholder names in first-occurrence order (duplicates kept)
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

/// Live view over the registered routes, in registration order
#[derive(Debug, Clone, Copy)]
pub struct Routes<'a> {
    pub(crate) entries: &'a [(String, RouteDefinition)],
    pub(crate) index: &'a HashMap<String, usize>,
}

impl<'a> Routes<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&'a RouteDefinition> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a RouteDefinition)> {
        self.entries.iter().map(|(name, route)| (name.as_str(), route))
    }
}
