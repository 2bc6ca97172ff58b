//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! validated handler input
//!     → client.rs (URL build, key injection, single GET with timeout)
//!     → UpstreamResponse (status + raw body)
//!     → http/response.rs (relay to caller)
//! ```

pub mod client;

pub use client::{UpstreamClient, UpstreamError, UpstreamResponse};
