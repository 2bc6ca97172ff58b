//! Read-only reverse proxy for the KCSC building-codes OpenAPI.
//!
//! Forwards `/codelist` and `/codeviewer/{codeType}/{code}` to the upstream
//! with a server-held key attached, optionally gating callers behind a
//! shared `X-Api-Key` secret.

pub mod codes;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
