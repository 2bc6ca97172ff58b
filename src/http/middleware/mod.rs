pub mod auth;

pub use auth::{caller_auth_middleware, X_API_KEY};
