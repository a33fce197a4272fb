//! Requirement sanitization.
//!
//! A requirement is the pattern body a placeholder must match. Matchers
//! compile it inside their own anchored expression, so one leading `^` and
//! one trailing `$` are stripped. The body itself is never validated.

use serde_json::Value;

use crate::error::{RoutingError, RoutingResult};

/// Sanitize a raw requirement value for the placeholder `key`.
///
/// Fails with [`RoutingError::RequirementNotString`] when `raw` is not a
/// string, before any stripping happens.
pub fn sanitize_requirement(key: &str, raw: &Value) -> RoutingResult<String> {
    match raw {
        Value::String(pattern) => strip_anchors(key, pattern),
        other => {
            tracing::debug!(key = %key, value = %other, "Rejected non-string requirement");
            Err(RoutingError::requirement_not_string(key))
        }
    }
}

/// Strip at most one leading `^` and at most one trailing `$` from `pattern`.
pub fn strip_anchors(key: &str, pattern: &str) -> RoutingResult<String> {
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    let pattern = pattern.strip_suffix('$').unwrap_or(pattern);

    if pattern.is_empty() {
        tracing::debug!(key = %key, "Rejected empty requirement");
        return Err(RoutingError::requirement_is_empty(key));
    }

    Ok(pattern.to_string())
}
