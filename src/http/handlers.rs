use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::codes::{CodeNumber, CodeType};
use crate::error::ProxyError;
use crate::http::response::relay;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub ok: bool,
}

pub async fn health() -> Json<Health> {
    Json(Health { ok: true })
}

/// `GET /codelist`
pub async fn code_list(State(state): State<AppState>) -> Result<Response, ProxyError> {
    ensure_upstream_key(&state)?;

    let upstream = state.upstream.code_list().await?;
    Ok(relay(upstream))
}

/// `GET /codeviewer/{code_type}/{code}`
///
/// The code type is checked before the code, so a request with both wrong
/// reports the code type. Segments that are not valid UTF-8 after
/// percent-decoding are decoded lossily and fail validation like any other
/// bad value, so the caller still gets the JSON message.
pub async fn code_viewer(
    State(state): State<AppState>,
    params: Result<Path<(String, String)>, PathRejection>,
    uri: Uri,
) -> Result<Response, ProxyError> {
    ensure_upstream_key(&state)?;

    let (code_type, code) = match params {
        Ok(Path(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Path parameters rejected, decoding lossily");
            lossy_path_params(uri.path())
        }
    };

    let code_type: CodeType = code_type.parse()?;
    let code: CodeNumber = code.parse()?;

    let upstream = state.upstream.code_viewer(code_type, &code).await?;
    Ok(relay(upstream))
}

pub async fn not_found() -> impl IntoResponse {
    ProxyError::NotFound
}

/// Last two segments of `path`, percent-decoded with U+FFFD replacement.
fn lossy_path_params(path: &str) -> (String, String) {
    let decode = |segment: &str| percent_decode_str(segment).decode_utf8_lossy().into_owned();
    let mut segments = path.rsplit('/');
    let code = segments.next().map(decode).unwrap_or_default();
    let code_type = segments.next().map(decode).unwrap_or_default();
    (code_type, code)
}

fn ensure_upstream_key(state: &AppState) -> Result<(), ProxyError> {
    if state.config.upstream.api_key.is_empty() {
        return Err(ProxyError::MissingUpstreamKey);
    }
    Ok(())
}
