//! Route definition subsystem.
//!
//! # Data Flow
//! ```text
//! Route::new(name, path, handler)
//!     → path.rs (normalize leading slash)
//!     → Route (immutable)
//!
//! Route::with_options(name, path, handler, options)
//!     → path.rs (normalize leading slash)
//!     → requirement.rs (type check, strip ^ and $)
//!     → Route (immutable) or RoutingError
//!
//! Persistence:
//!     Route::serialize → JSON → Route::deserialize
//! ```
//!
//! # Design Decisions
//! - Construction is all-or-nothing: the first invalid requirement aborts it
//! - Matching and dispatch belong to the consumer, not this subsystem
//! - Requirement bodies are not compiled or validated as regexes

pub mod path;
pub mod requirement;
pub mod route;

pub use route::{Params, Route, RouteOptions};
