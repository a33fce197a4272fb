//! Route definitions for HTTP routers.
//!
//! A [`Route`] is an immutable descriptor of one endpoint: its name, path
//! pattern, handler and the metadata a matcher needs. Invalid definitions
//! are reported as [`RoutingError`].

pub mod config;
pub mod error;
pub mod observability;
pub mod routing;

pub use config::RoutingConfig;
pub use error::{RoutingError, RoutingResult};
pub use routing::{Params, Route, RouteOptions};
