//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject routes without a name
//! - Build every route once so requirement errors surface at load time
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RoutingConfig → Result<routes, Vec<ValidationError>>
//! - Each route is built exactly once; callers that need the routes keep them
//! - Name uniqueness is left to whoever registers the routes

use std::fmt;

use serde_json::Value;

use crate::config::schema::RoutingConfig;
use crate::error::RoutingError;
use crate::routing::Route;

/// A semantic problem found in a route definitions file.
#[derive(Debug)]
pub enum ValidationError {
    /// The route at `index` has an empty name.
    EmptyName { index: usize },
    /// The route could not be constructed.
    InvalidRoute { name: String, source: RoutingError },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName { index } => {
                write!(f, "route #{} has an empty name", index)
            }
            ValidationError::InvalidRoute { name, source } => {
                write!(f, "route \"{}\": {}", name, source)
            }
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::EmptyName { .. } => None,
            ValidationError::InvalidRoute { source, .. } => Some(source),
        }
    }
}

/// Check every route definition in `config`.
pub fn validate_config(config: &RoutingConfig) -> Result<(), Vec<ValidationError>> {
    validate_routes(config).map(|_| ())
}

/// Check every route definition in `config` and return the built routes,
/// in file order.
pub fn validate_routes(
    config: &RoutingConfig,
) -> Result<Vec<Route<Value>>, Vec<ValidationError>> {
    let mut routes = Vec::with_capacity(config.routes.len());
    let mut errors = Vec::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            tracing::warn!(index, "Route definition has an empty name");
            errors.push(ValidationError::EmptyName { index });
        }

        match route.build() {
            Ok(built) => routes.push(built),
            Err(source) => {
                tracing::warn!(route = %route.name, error = %source, "Invalid route definition");
                errors.push(ValidationError::InvalidRoute {
                    name: route.name.clone(),
                    source,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(routes)
    } else {
        Err(errors)
    }
}
