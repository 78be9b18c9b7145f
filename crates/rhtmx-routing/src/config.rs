// File: src/config.rs
// Purpose: Route manifest parsing from routes.toml / routes.json

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, RoutingError};
use crate::placeholder::PlaceholderPattern;
use crate::{RoutingOptions, RoutingService};

/// Route manifest
///
/// ```toml
/// [routing]
/// placeholder_pattern = "symfony"
/// append_extra_parameters = true
///
/// [routes]
/// home = { path = "/home" }
/// user = { path = "/user/{userId}" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutesManifest {
    #[serde(default)]
    pub routing: RoutingSection,

    /// Route entries in document order, kept untyped so that registration
    /// applies the same shape checks as [`RoutingService::add_definition`]
    #[serde(default)]
    pub routes: serde_json::Map<String, serde_json::Value>,
}

/// Routing options section
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingSection {
    /// Alias (`symfony`, `angular`) or custom pattern containing `%s`
    #[serde(default = "default_placeholder_pattern")]
    pub placeholder_pattern: String,

    /// Append inputs not consumed by the path as a query string
    #[serde(default = "default_true")]
    pub append_extra_parameters: bool,
}

fn default_placeholder_pattern() -> String {
    "symfony".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RoutingSection {
    fn default() -> Self {
        Self {
            placeholder_pattern: default_placeholder_pattern(),
            append_extra_parameters: default_true(),
        }
    }
}

impl RoutingSection {
    pub fn to_options(&self) -> Result<RoutingOptions> {
        Ok(RoutingOptions {
            placeholder_pattern: PlaceholderPattern::parse(&self.placeholder_pattern)?,
            append_extra_parameters: self.append_extra_parameters,
        })
    }
}

impl RoutesManifest {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a manifest; `.json` files are parsed as JSON, anything else as TOML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RoutingError::Io(path.to_path_buf(), e))?;
        debug!(path = %path.display(), "loading route manifest");

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Builds a routing service: options first, then routes in document order
    pub fn into_service(self) -> Result<RoutingService> {
        let mut service = RoutingService::with_options(self.routing.to_options()?)?;
        for (name, definition) in &self.routes {
            service.add_definition(name.as_str(), definition)?;
        }
        Ok(service)
    }
}
