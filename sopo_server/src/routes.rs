use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use sopo_core::{render_result_page, ClassifyError, IssueError, Issuer, Verifier};
use sopo_shared::{ApiError, ResultQuery, SignRequest, SignResponse};
use tracing::{debug, warn};

use crate::AppState;

/// Plain-text error response carrying the [`ApiError`] status.
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.0.to_string()).into_response()
    }
}

impl From<IssueError> for AppError {
    fn from(err: IssueError) -> Self {
        Self(err.into())
    }
}

impl From<ClassifyError> for AppError {
    fn from(err: ClassifyError) -> Self {
        Self(err.into())
    }
}

/// Any body without a string `result` is refused like a bad code,
/// whatever its content type.
pub async fn route_sign(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SignResponse>, AppError> {
    let req: SignRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("refusing to sign unreadable body: {e}");
        AppError(ApiError::InvalidInput)
    })?;
    let token = Issuer::new(&state.key).issue(&req.result).map_err(|e| {
        warn!(result = %req.result, "refusing to sign: {e}");
        e
    })?;
    Ok(Json(token.into()))
}

pub async fn route_not_found() -> AppError {
    AppError(ApiError::NotFound)
}

/// Code from the last path segment, with an optional `.html` suffix.
fn result_code(path: &str) -> &str {
    let last = path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("");
    last.strip_suffix(".html").unwrap_or(last)
}

pub async fn route_result(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    query: Option<Query<ResultQuery>>,
) -> Result<Html<String>, AppError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let token = query.token();
    let code = result_code(&path);
    let classification = Verifier::new(&state.key)
        .classify(code, token.as_ref())
        .map_err(|e| {
            debug!(path = %path, "unknown result page: {e}");
            e
        })?;
    Ok(Html(render_result_page(&classification, &state.base_url)))
}
