//! Configuration schema definitions.
//!
//! This module defines the structure of a route definitions file.
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RoutingResult;
use crate::routing::{Route, RouteOptions};

/// Root configuration for a set of route definitions.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutingConfig {
    /// Route definitions, in file order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier.
    pub name: String,

    /// Path pattern; normalized when the route is built.
    #[serde(default)]
    pub path: String,

    /// Opaque handler reference handed to the dispatcher.
    #[serde(default)]
    pub handler: Value,

    #[serde(flatten)]
    pub options: RouteOptions,
}

impl RouteConfig {
    /// Build the route described by this definition.
    pub fn build(&self) -> RoutingResult<Route<Value>> {
        Route::with_options(
            self.name.clone(),
            &self.path,
            self.handler.clone(),
            self.options.clone(),
        )
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
