//! Loading route definitions from TOML files.

use stack_routing::config::validation::ValidationError;
use stack_routing::config::{load_config, load_routes, ConfigError};
use stack_routing::RoutingError;

mod common;

const ROUTES: &str = r#"
[observability]
log_level = "debug"

[[routes]]
name = "home"
path = ""
handler = "HomeController::index"

[[routes]]
name = "blog_show"
path = "blog/{slug}"
handler = "BlogController::show"
allows = ["get"]
requirements = { slug = "^[a-z0-9-]+$" }

[[routes]]
name = "blog_feed"
path = "/blog/feed.xml"
accepts = ["Application/RSS+XML"]
is_routable = false
"#;

#[test]
fn test_load_routes() {
    let file = common::write_temp_file(ROUTES);

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(config.routes.len(), 3);

    let routes = load_routes(file.path()).unwrap();

    assert_eq!(routes[0].path(), "/");
    assert_eq!(routes[0].handler().as_str(), Some("HomeController::index"));

    assert_eq!(routes[1].path(), "/blog/{slug}");
    assert_eq!(routes[1].allows(), ["GET"]);
    assert_eq!(routes[1].requirement("slug"), "[a-z0-9-]+");

    assert!(routes[2].handler().is_null());
    assert_eq!(routes[2].accepts(), ["application/rss+xml"]);
    assert!(!routes[2].is_routable());
}

#[test]
fn test_load_invalid_routes() {
    let file = common::write_temp_file(
        r#"
        [[routes]]
        name = "show"
        path = "/{id}"
        requirements = { id = "^" }
        "#,
    );

    let err = load_routes(file.path()).unwrap_err();

    match err {
        ConfigError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(matches!(
                &errors[0],
                ValidationError::InvalidRoute { source: RoutingError::RequirementIsEmpty(key), .. }
                    if key == "id"
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}
