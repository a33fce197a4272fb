//! Shared helpers for integration tests.

use std::collections::BTreeMap;
use std::io::Write;

use serde_json::Value;
use stack_routing::{Route, RouteOptions, RoutingResult};
use tempfile::NamedTempFile;

/// Handler stand-in that can be called and compared by its output.
#[allow(dead_code)]
pub fn callable() -> &'static str {
    "foo"
}

/// Build a route whose only option is the given requirement set.
#[allow(dead_code)]
pub fn route_with_requirements(
    requirements: &[(&str, Value)],
) -> RoutingResult<Route<Value>> {
    let requirements: BTreeMap<String, Value> = requirements
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();

    Route::with_options(
        "foo",
        "/{foo}",
        Value::Null,
        RouteOptions {
            requirements,
            ..RouteOptions::default()
        },
    )
}

/// Write `content` to a temporary file that is removed when dropped.
#[allow(dead_code)]
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("stack-routing-")
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
