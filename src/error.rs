//! Caller-facing error taxonomy.
//!
//! Every variant maps to a status code and a fixed JSON body
//! `{"message": ...}`. Messages are static strings so nothing from the
//! configuration or from upstream errors can leak into a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::upstream::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Missing KCSC_OPENAPI_KEY env var")]
    MissingUpstreamKey,

    #[error("Invalid codeType. Use KDS, KCS, or KWCS.")]
    InvalidCodeType,

    #[error("Invalid code. Use numeric string like 111000.")]
    InvalidCode,

    #[error("Not Found")]
    NotFound,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Unauthorized => StatusCode::UNAUTHORIZED,
            ProxyError::MissingUpstreamKey => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::InvalidCodeType | ProxyError::InvalidCode => StatusCode::BAD_REQUEST,
            ProxyError::NotFound => StatusCode::NOT_FOUND,
            ProxyError::Upstream(UpstreamError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message sent to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            ProxyError::Unauthorized => "Unauthorized",
            ProxyError::MissingUpstreamKey => "Missing KCSC_OPENAPI_KEY env var",
            ProxyError::InvalidCodeType => "Invalid codeType. Use KDS, KCS, or KWCS.",
            ProxyError::InvalidCode => "Invalid code. Use numeric string like 111000.",
            ProxyError::NotFound => "Not Found",
            ProxyError::Upstream(UpstreamError::Timeout) => "Upstream request timed out",
            ProxyError::Upstream(_) => "Upstream request failed",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ProxyError::MissingUpstreamKey => {
                tracing::error!("KCSC_OPENAPI_KEY is not configured; refusing to proxy")
            }
            ProxyError::Upstream(e) => tracing::error!(error = %e, "Upstream error"),
            _ => tracing::debug!(status = %status, error = %self, "Request rejected"),
        }

        let body = ErrorBody {
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
