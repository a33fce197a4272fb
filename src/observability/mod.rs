//! Observability subsystem.
//!
//! Routing emits `tracing` events: route creation at trace level, rejected
//! requirements at debug, loaded definition files at info and invalid
//! definitions at warn. Installing a subscriber is up to the embedding
//! application; `logging::init_logging` is the default one.

pub mod logging;
