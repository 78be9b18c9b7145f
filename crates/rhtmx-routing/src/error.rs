/// Error types for route registration, configuration and URL generation
///
/// Every fallible operation in the crate returns [`RoutingError`]. Errors are
/// raised synchronously and never leave the registry or the placeholder
/// configuration half-updated.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RoutingError>;

#[derive(Debug, Error)]
pub enum RoutingError {
    /// Route definition has the wrong shape (not an object, non-string path)
    #[error("Route \"{route}\" must be an object with a string path: {reason}")]
    InvalidDefinition { route: String, reason: String },

    /// Route definition has no `path`
    #[error("Path is required for route: \"{route}\".")]
    MissingPath { route: String },

    /// Placeholder pattern has no `%s` marker and is not a known alias
    #[error(
        "Placeholder pattern \"{0}\" must contain a \"%s\" part or be one of pre-defined ones (symfony, angular)."
    )]
    InvalidPlaceholderPattern(String),

    #[error("Route with name: \"{0}\" is not registered with the routing service.")]
    UnknownRoute(String),

    /// Route declares parameters but the caller supplied none at all
    #[error("Missing input parameters for route: \"{route}\".")]
    MissingParameters { route: String },

    #[error("Missing input parameter: \"{parameter}\" for route: \"{route}\".")]
    MissingParameter { parameter: String, route: String },

    #[error("Failed to compile placeholder rule")]
    Regex(#[from] regex::Error),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Route manifest parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Route manifest parsing error")]
    Json(#[from] serde_json::Error),
}

impl RoutingError {
    /// Name of the route this error refers to, if any
    pub fn route_name(&self) -> Option<&str> {
        match self {
            Self::InvalidDefinition { route, .. }
            | Self::MissingPath { route }
            | Self::MissingParameters { route }
            | Self::MissingParameter { route, .. } => Some(route),
            Self::UnknownRoute(route) => Some(route),
            _ => None,
        }
    }
}
