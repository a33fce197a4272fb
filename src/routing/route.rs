//! Route descriptor.
//!
//! # Responsibilities
//! - Capture the identity and matching metadata of one endpoint
//! - Normalize the path and sanitize requirements at construction
//! - Encode every field for persistence and restore it unchanged
//!
//! # Design Decisions
//! - Immutable after construction; only accessors are exposed
//! - Handler is stored as-is and never inspected
//! - Decoding trusts the encoded values and does not re-sanitize

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RoutingResult;
use crate::routing::path::normalize_path;
use crate::routing::requirement::sanitize_requirement;

/// Free-form route metadata keyed by name.
pub type Params = BTreeMap<String, Value>;

/// Optional settings accepted by [`Route::with_options`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Default values for path placeholders.
    pub defaults: Params,

    /// Raw placeholder patterns, sanitized on construction.
    pub requirements: BTreeMap<String, Value>,

    /// Host pattern to match. Empty matches any host.
    pub host: String,

    /// Accepted content types, lower-cased on construction.
    pub accepts: Vec<String>,

    /// Allowed HTTP methods, upper-cased on construction.
    pub allows: Vec<String>,

    pub attributes: Params,

    /// Authentication/authorization metadata.
    pub auth: Params,

    /// Route requires a secure transport.
    pub secure: bool,

    /// Wildcard segment capture settings.
    pub wildcard: Params,

    /// Route can be matched; false means it only generates paths.
    #[serde(alias = "isRoutable")]
    pub is_routable: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            defaults: Params::new(),
            requirements: BTreeMap::new(),
            host: String::new(),
            accepts: Vec::new(),
            allows: Vec::new(),
            attributes: Params::new(),
            auth: Params::new(),
            secure: false,
            wildcard: Params::new(),
            is_routable: true,
        }
    }
}

/// A Route describes a routable endpoint and its parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Route<H = Value> {
    name: String,
    path: String,
    host: String,
    defaults: Params,
    requirements: BTreeMap<String, String>,
    accepts: Vec<String>,
    allows: Vec<String>,
    attributes: Params,
    auth: Params,
    secure: bool,
    handler: H,
    wildcard: Params,
    #[serde(rename = "isRoutable")]
    is_routable: bool,
}

impl<H> Route<H> {
    /// Create a route with every optional field left empty.
    pub fn new(name: impl Into<String>, path: &str, handler: H) -> Self {
        let route = Self {
            name: name.into(),
            path: normalize_path(path),
            host: String::new(),
            defaults: Params::new(),
            requirements: BTreeMap::new(),
            accepts: Vec::new(),
            allows: Vec::new(),
            attributes: Params::new(),
            auth: Params::new(),
            secure: false,
            handler,
            wildcard: Params::new(),
            is_routable: true,
        };

        tracing::trace!(route = %route.name, path = %route.path, "Route created");
        route
    }

    /// Create a route with optional parameters.
    ///
    /// Requirements are sanitized first; the route is only returned when all
    /// of them are valid.
    pub fn with_options(
        name: impl Into<String>,
        path: &str,
        handler: H,
        options: RouteOptions,
    ) -> RoutingResult<Self> {
        let requirements = options
            .requirements
            .iter()
            .map(|(key, raw)| {
                sanitize_requirement(key, raw).map(|pattern| (key.clone(), pattern))
            })
            .collect::<RoutingResult<BTreeMap<_, _>>>()?;

        let route = Self {
            name: name.into(),
            path: normalize_path(path),
            host: options.host,
            defaults: options.defaults,
            requirements,
            accepts: options.accepts.iter().map(|a| a.to_ascii_lowercase()).collect(),
            allows: options.allows.iter().map(|a| a.to_ascii_uppercase()).collect(),
            attributes: options.attributes,
            auth: options.auth,
            secure: options.secure,
            handler,
            wildcard: options.wildcard,
            is_routable: options.is_routable,
        };

        tracing::trace!(
            route = %route.name,
            path = %route.path,
            requirements = route.requirements.len(),
            routable = route.is_routable,
            "Route created"
        );
        Ok(route)
    }

    /// Returns accepted content types.
    pub fn accepts(&self) -> &[String] {
        &self.accepts
    }

    /// Returns allowed HTTP methods.
    pub fn allows(&self) -> &[String] {
        &self.allows
    }

    pub fn attributes(&self) -> &Params {
        &self.attributes
    }

    /// Returns the authentication/authorization values.
    pub fn auth(&self) -> &Params {
        &self.auth
    }

    /// Returns default placeholder values.
    pub fn defaults(&self) -> &Params {
        &self.defaults
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Return true if this route can be matched; if not, it can only be
    /// used to generate a path.
    pub fn is_routable(&self) -> bool {
        self.is_routable
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn requirements(&self) -> &BTreeMap<String, String> {
        &self.requirements
    }

    /// Returns the requirement for `key`, or `""` when none is defined.
    pub fn requirement(&self, key: &str) -> &str {
        self.requirements.get(key).map(String::as_str).unwrap_or("")
    }

    /// Return true if this route responds only on a secure transport.
    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn wildcard(&self) -> &Params {
        &self.wildcard
    }
}

impl<H: Serialize> Route<H> {
    /// Encode every field of the route as JSON.
    pub fn serialize(&self) -> RoutingResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<H: DeserializeOwned> Route<H> {
    /// Restore a route from [`Route::serialize`] output.
    ///
    /// Values are taken verbatim; requirements are not sanitized again.
    pub fn deserialize(blob: &str) -> RoutingResult<Self> {
        Ok(serde_json::from_str(blob)?)
    }
}
