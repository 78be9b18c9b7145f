//! # RHTMX Routing
//!
//! Client-side URL generation from named route templates:
//! - Named routes with placeholders (`/user/{userId}`)
//! - Configurable placeholder patterns (`{%s}`, `:%s`, or any custom `%s` template)
//! - Whitespace-tolerant placeholders (`/foo/{ spaces }/bar`)
//! - Scalar coercion (`true` → `1`, `null` → empty, percent-encoded strings)
//! - Leftover parameters appended as a query string (`/search?q=a%20b&page=2`)
//!
//! Generation only: matching incoming URLs back to routes is out of scope.
//!
//! ## Example
//!
//! ```
//! use rhtmx_routing::{Parameters, RoutingService};
//!
//! let mut routing = RoutingService::new();
//! routing
//!     .add("home", "/home")
//!     .add("user", "/user/{userId}");
//!
//! assert_eq!(routing.generate("home", None).unwrap(), "/home");
//!
//! let params = Parameters::new().with("userId", 117).with("tab", "posts");
//! assert_eq!(
//!     routing.generate("user", Some(&params)).unwrap(),
//!     "/user/117?tab=posts"
//! );
//! ```

use std::collections::HashMap;
use tracing::{debug, trace};

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod params;
pub mod placeholder;
pub mod query;
pub mod route;
pub mod url;
pub mod value;

pub use config::RoutesManifest;
pub use error::{Result, RoutingError};
pub use params::Parameters;
pub use placeholder::{PlaceholderEngine, PlaceholderPattern};
pub use route::{RouteDefinition, Routes};
pub use value::Value;

// ============================================================================
// Options
// ============================================================================

/// Behaviour switches for a [`RoutingService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingOptions {
    /// Convention used to recognise placeholders in paths added from now on
    pub placeholder_pattern: PlaceholderPattern,
    /// Append inputs not consumed by the path as a query string.
    /// When `false`, leftover inputs are ignored.
    pub append_extra_parameters: bool,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            placeholder_pattern: PlaceholderPattern::symfony(),
            append_extra_parameters: true,
        }
    }
}

// ============================================================================
// Routing Service
// ============================================================================

/// Registry of named routes and the URL generation entry point
///
/// Each instance owns its routes and placeholder configuration. Parameter
/// lists are extracted when a route is added, under the pattern active at
/// that moment; changing the pattern later does not re-extract them.
#[derive(Debug, Clone)]
pub struct RoutingService {
    routes: Vec<(String, RouteDefinition)>,
    index: HashMap<String, usize>,
    engine: PlaceholderEngine,
    append_extra_parameters: bool,
}

impl RoutingService {
    /// Creates an empty service with `{%s}` placeholders and query appending on
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            index: HashMap::new(),
            engine: PlaceholderEngine::new(),
            append_extra_parameters: true,
        }
    }

    pub fn with_options(options: RoutingOptions) -> Result<Self> {
        Ok(Self {
            engine: PlaceholderEngine::with_pattern(options.placeholder_pattern)?,
            append_extra_parameters: options.append_extra_parameters,
            ..Self::new()
        })
    }

    // ========================================================================
    // Builder API
    // ========================================================================

    /// Sets the placeholder pattern (alias or custom `%s` template)
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_routing::RoutingService;
    ///
    /// let routing = RoutingService::new()
    ///     .with_placeholder_pattern("angular").unwrap()
    ///     .with_route("user", "/user/:userId");
    ///
    /// assert_eq!(routing.get("user").unwrap().parameters(), ["userId"]);
    /// ```
    pub fn with_placeholder_pattern(mut self, value: &str) -> Result<Self> {
        self.set_placeholder_pattern(value)?;
        Ok(self)
    }

    /// Enables or disables appending leftover inputs as a query string
    pub fn with_extra_parameters(mut self, enabled: bool) -> Self {
        self.append_extra_parameters = enabled;
        self
    }

    pub fn with_route(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.add(name, path);
        self
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Sets the placeholder pattern; on error the current pattern is kept
    ///
    /// Accepts a template containing `%s` or one of the aliases `symfony`
    /// (`{%s}`) and `angular` (`:%s`).
    pub fn set_placeholder_pattern(&mut self, value: &str) -> Result<&mut Self> {
        let pattern = PlaceholderPattern::parse(value)?;
        self.engine.set_pattern(pattern)?;
        debug!(pattern = %self.engine.pattern(), "placeholder pattern changed");
        Ok(self)
    }

    pub fn placeholder_pattern(&self) -> &PlaceholderPattern {
        self.engine.pattern()
    }

    pub fn appends_extra_parameters(&self) -> bool {
        self.append_extra_parameters
    }

    // ========================================================================
    // Registry
    // ========================================================================

    /// Adds (or replaces) a route; supports chaining
    ///
    /// Re-adding an existing name keeps the route's original position.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_routing::RoutingService;
    ///
    /// let mut routing = RoutingService::new();
    /// routing
    ///     .add("user", "/user/{userId}")
    ///     .add("user.service", "/user/{userId}/service/{serviceId}");
    ///
    /// let route = routing.get("user.service").unwrap();
    /// assert_eq!(route.parameters(), ["userId", "serviceId"]);
    /// ```
    pub fn add(&mut self, name: impl Into<String>, path: impl Into<String>) -> &mut Self {
        let name = name.into();
        let path = path.into();
        let parameters = self.engine.extract_parameters(&path);
        debug!(route = %name, path = %path, ?parameters, "route registered");

        let definition = RouteDefinition::new(path, parameters);
        match self.index.get(&name) {
            Some(&i) => self.routes[i].1 = definition,
            None => {
                self.index.insert(name.clone(), self.routes.len());
                self.routes.push((name, definition));
            }
        }
        self
    }

    /// Alias for [`add`](Self::add)
    pub fn add_route(&mut self, name: impl Into<String>, path: impl Into<String>) -> &mut Self {
        self.add(name, path)
    }

    /// Adds a route from an untyped definition such as `{"path": "/home"}`
    ///
    /// The definition must be an object with a string `path`; other keys are
    /// ignored. On error the registry is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_routing::{RoutingError, RoutingService};
    /// use serde_json::json;
    ///
    /// let mut routing = RoutingService::new();
    /// routing.add_definition("home", &json!({ "path": "/home" })).unwrap();
    ///
    /// let err = routing.add_definition("broken", &json!({ "name": "x" })).unwrap_err();
    /// assert!(matches!(err, RoutingError::MissingPath { .. }));
    /// ```
    pub fn add_definition(&mut self, name: impl Into<String>, definition: &serde_json::Value) -> Result<&mut Self> {
        let name = name.into();
        let object = definition.as_object().ok_or_else(|| RoutingError::InvalidDefinition {
            route: name.clone(),
            reason: "route must be an object".to_string(),
        })?;

        let path = match object.get("path") {
            None => return Err(RoutingError::MissingPath { route: name }),
            Some(serde_json::Value::String(path)) => path.clone(),
            Some(_) => {
                return Err(RoutingError::InvalidDefinition {
                    route: name,
                    reason: "path must be a string".to_string(),
                })
            }
        };

        Ok(self.add(name, path))
    }

    /// Returns the route registered under `name`, if any
    pub fn get(&self, name: &str) -> Option<&RouteDefinition> {
        self.index.get(name).map(|&i| &self.routes[i].1)
    }

    /// Alias for [`get`](Self::get)
    pub fn get_route(&self, name: &str) -> Option<&RouteDefinition> {
        self.get(name)
    }

    /// Strict lookup: unknown names are an error
    pub fn route(&self, name: &str) -> Result<&RouteDefinition> {
        self.get(name)
            .ok_or_else(|| RoutingError::UnknownRoute(name.to_string()))
    }

    /// All routes in registration order
    pub fn get_all(&self) -> Routes<'_> {
        Routes {
            entries: &self.routes,
            index: &self.index,
        }
    }

    /// Alias for [`get_all`](Self::get_all)
    pub fn get_routes(&self) -> Routes<'_> {
        self.get_all()
    }

    /// Removes every route; supports chaining
    pub fn clear(&mut self) -> &mut Self {
        debug!(count = self.routes.len(), "clearing routes");
        self.routes.clear();
        self.index.clear();
        self
    }

    /// Alias for [`clear`](Self::clear)
    pub fn clear_routes(&mut self) -> &mut Self {
        self.clear()
    }

    // ========================================================================
    // URL Generation
    // ========================================================================

    /// Generates a URL for the named route
    ///
    /// - Unknown name → [`RoutingError::UnknownRoute`]
    /// - Route declares parameters and `inputs` is `None` →
    ///   [`RoutingError::MissingParameters`]
    /// - A declared parameter absent from `inputs` →
    ///   [`RoutingError::MissingParameter`]
    ///
    /// Inputs the path does not declare are appended as a query string,
    /// unless query appending is disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_routing::{Parameters, RoutingService, Value};
    ///
    /// let routing = RoutingService::new()
    ///     .with_route("user", "/user/{userId}")
    ///     .with_route("search", "/search");
    ///
    /// let user = |v: Value| Parameters::new().with("userId", v);
    /// assert_eq!(routing.generate("user", Some(&user(117.into()))).unwrap(), "/user/117");
    /// assert_eq!(routing.generate("user", Some(&user(Value::Null))).unwrap(), "/user/");
    /// assert_eq!(routing.generate("user", Some(&user(true.into()))).unwrap(), "/user/1");
    ///
    /// let search = Parameters::new().with("q", "a b").with("page", 2);
    /// assert_eq!(
    ///     routing.generate("search", Some(&search)).unwrap(),
    ///     "/search?q=a%20b&page=2"
    /// );
    /// ```
    pub fn generate(&self, name: &str, inputs: Option<&Parameters>) -> Result<String> {
        let route = self.route(name)?;

        let inputs = match inputs {
            Some(inputs) => inputs,
            None if route.has_parameters() => {
                return Err(RoutingError::MissingParameters {
                    route: name.to_string(),
                })
            }
            None => return Ok(route.path().to_string()),
        };

        let path = self.engine.substitute(name, route, inputs)?;

        if !self.append_extra_parameters {
            return Ok(path);
        }

        let extra = inputs.without(route.parameters());
        if extra.is_empty() {
            return Ok(path);
        }

        trace!(route = name, extra = extra.len(), "appending extra parameters");
        Ok(url::add_parameters_to_url(&path, &extra))
    }

    /// Convenience wrapper over [`generate`](Self::generate) taking pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_routing::RoutingService;
    ///
    /// let routing = RoutingService::new()
    ///     .with_route("post.show", "/posts/{year}/{slug}");
    ///
    /// let url = routing
    ///     .url_for("post.show", [("year", 2024.into()), ("slug", "hello-world".into())])
    ///     .unwrap();
    /// assert_eq!(url, "/posts/2024/hello-world");
    /// ```
    pub fn url_for<'a, I>(&self, name: &str, params: I) -> Result<String>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let params: Parameters = params.into_iter().collect();
        self.generate(name, Some(&params))
    }
}

impl Default for RoutingService {
    fn default() -> Self {
        Self::new()
    }
}
