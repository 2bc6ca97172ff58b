//! Relay of upstream replies to the caller.
//!
//! The upstream status is kept verbatim. A body that parses as JSON is
//! re-emitted as JSON; anything else is wrapped as `{"raw": "<text>"}`.
//! Upstream headers are not forwarded.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::upstream::UpstreamResponse;

pub fn relay(upstream: UpstreamResponse) -> Response {
    let UpstreamResponse { status, body } = upstream;
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => (status, Json(value)).into_response(),
        Err(_) => {
            tracing::debug!(status = %status, "Upstream body is not JSON, wrapping as raw");
            (status, Json(json!({ "raw": body }))).into_response()
        }
    }
}
