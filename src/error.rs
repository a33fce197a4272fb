//! Routing error definitions.
//!
//! Every failure raised while defining or resolving routes is a variant of
//! [`RoutingError`]. The associated constructors format the context of each
//! kind; callers raise them with `Err(..)` and match on the variant.

use thiserror::Error;

/// Errors that can occur while building or resolving routes.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// A route lookup by name failed.
    #[error("No route found for \"{0}\".")]
    RouteNotFound(String),

    /// A rule rejected the path/class/route combination.
    #[error("{path} FAILED {class} ON {route}")]
    RuleNotAllowed {
        path: String,
        class: String,
        route: String,
    },

    /// A rule lookup returned something that is not a rule.
    #[error("Expected Rule, got {rule} for key {key}")]
    RuleNotFound { rule: String, key: String },

    /// A resource lookup by path failed.
    #[error("No routes found for \"{0}\".")]
    ResourceNotFound(String),

    /// A requirement value is not a string.
    #[error("Routing requirement for \"{0}\" must be a string.")]
    RequirementNotString(String),

    /// A requirement is empty once its anchors are stripped.
    #[error("Routing requirement for \"{0}\" cannot be empty.")]
    RequirementIsEmpty(String),

    /// Encoding or decoding a route failed.
    #[error("Route codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl RoutingError {
    pub fn route_not_found(name: impl Into<String>) -> Self {
        Self::RouteNotFound(name.into())
    }

    pub fn rule_not_allowed(
        path: impl Into<String>,
        class: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self::RuleNotAllowed {
            path: path.into(),
            class: class.into(),
            route: route.into(),
        }
    }

    pub fn rule_not_found(rule: impl Into<String>, key: impl Into<String>) -> Self {
        Self::RuleNotFound {
            rule: rule.into(),
            key: key.into(),
        }
    }

    pub fn resource_not_found(path: impl Into<String>) -> Self {
        Self::ResourceNotFound(path.into())
    }

    pub fn requirement_not_string(key: impl Into<String>) -> Self {
        Self::RequirementNotString(key.into())
    }

    pub fn requirement_is_empty(key: impl Into<String>) -> Self {
        Self::RequirementIsEmpty(key.into())
    }

    /// Return true for the kinds raised while sanitizing requirements.
    pub fn is_requirement_error(&self) -> bool {
        matches!(
            self,
            Self::RequirementNotString(_) | Self::RequirementIsEmpty(_)
        )
    }
}

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RoutingError::route_not_found("blog_show");
        assert_eq!(err.to_string(), "No route found for \"blog_show\".");

        let err = RoutingError::rule_not_allowed("/admin", "IsAdmin", "admin_index");
        assert_eq!(err.to_string(), "/admin FAILED IsAdmin ON admin_index");

        let err = RoutingError::rule_not_found("string", "auth");
        assert_eq!(err.to_string(), "Expected Rule, got string for key auth");

        let err = RoutingError::resource_not_found("/missing");
        assert_eq!(err.to_string(), "No routes found for \"/missing\".");

        let err = RoutingError::requirement_not_string("id");
        assert_eq!(
            err.to_string(),
            "Routing requirement for \"id\" must be a string."
        );

        let err = RoutingError::requirement_is_empty("id");
        assert_eq!(
            err.to_string(),
            "Routing requirement for \"id\" cannot be empty."
        );
    }

    #[test]
    fn test_requirement_error_kinds() {
        assert!(RoutingError::requirement_is_empty("id").is_requirement_error());
        assert!(RoutingError::requirement_not_string("id").is_requirement_error());
        assert!(!RoutingError::route_not_found("id").is_requirement_error());
        assert!(!RoutingError::resource_not_found("/").is_requirement_error());
    }

    #[test]
    fn test_codec_error_from_serde() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RoutingError::from(source);
        assert!(matches!(err, RoutingError::Codec(_)));
        assert!(err.to_string().starts_with("Route codec error:"));
    }
}
