//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (assign / propagate X-Request-ID)
//!     → middleware/auth.rs (X-Api-Key check on proxied routes)
//!     → handlers.rs (upstream key check, parameter validation)
//!     → upstream client (single GET)
//!     → response.rs (relay status, JSON or raw envelope)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
