use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, warn};

use crate::{
    pipeline::{ModerationPipeline, PipelineError},
    types::{ChatRequest, ChatResponse},
};

const GENERIC_ERROR_DETAIL: &str = "An internal error occurred. Please try again later.";

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ModerationPipeline>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let response = state.pipeline.handle_chat(request).await?;
    Ok(Json(response))
}

/// Error body for the `/chat` contract: `{"detail": "..."}`. Rejections keep
/// their specific reason; everything else collapses to a generic message so
/// internal detail never leaves the process.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<PipelineError> for ApiError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::Rejected(rejection) => {
                warn!(%rejection, "chat request rejected");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    detail: rejection.to_string(),
                }
            }
            PipelineError::Backend(source) => {
                error!(error = ?source, "chat request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    detail: GENERIC_ERROR_DETAIL.to_owned(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{pipeline::PipelineError, validator::Rejection};

    use super::{ApiError, GENERIC_ERROR_DETAIL};

    #[test]
    fn rejection_maps_to_400_with_specific_reason() {
        let error = ApiError::from(PipelineError::Rejected(Rejection::BlockedKeyword));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.detail(), "message contains prohibited content");
    }

    #[test]
    fn backend_failure_maps_to_generic_500() {
        let source = anyhow::anyhow!("tcp connect to 10.0.0.7:443 refused");
        let error = ApiError::from(PipelineError::Backend(source));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.detail(), GENERIC_ERROR_DETAIL);
        assert!(!error.detail().contains("10.0.0.7"));
    }
}
