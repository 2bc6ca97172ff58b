//! Caller authorization middleware.
//! Gates proxied routes behind the optional shared secret.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::ProxyError;
use crate::http::request::request_id;
use crate::http::server::AppState;

pub const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

pub async fn caller_auth_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // No shared secret configured: passthrough mode.
    if !state.config.auth.is_enabled() {
        return next.run(req).await;
    }

    let presented = req
        .headers()
        .get(&X_API_KEY)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if presented == state.config.auth.shared_secret.expose() {
        next.run(req).await
    } else {
        warn!(
            request_id = %request_id(&req),
            path = %req.uri().path(),
            header_present = req.headers().contains_key(&X_API_KEY),
            "Rejected caller with bad X-Api-Key"
        );
        ProxyError::Unauthorized.into_response()
    }
}
