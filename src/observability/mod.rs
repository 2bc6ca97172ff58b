//! Observability subsystem.
//!
//! Structured logging through `tracing`. Every request runs inside a span
//! carrying its method, path and request ID (see `http::server`).

pub mod logging;

pub use logging::init_logging;
