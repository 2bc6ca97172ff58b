//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (KCSC_OPENAPI_KEY, PROXY_API_KEY, PORT, KCSC_BASE_URL)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc with the handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the proxy runs from env vars alone
//! - Secrets are wrapped so `Debug` output and logs never carry them

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AuthConfig, ListenerConfig, ObservabilityConfig, ProxyConfig, Secret, UpstreamConfig};
