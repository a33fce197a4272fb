//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route definitions file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RoutingConfig (validated, immutable)
//!     → RouteConfig::build → Route
//! ```
//!
//! # Design Decisions
//! - All fields except a route's name have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks
//! - Route options in a file use the same names as `RouteOptions`

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_routes, parse_config, ConfigError};
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RoutingConfig;
