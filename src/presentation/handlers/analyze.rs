use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::Highlight;
use crate::infrastructure::observability::text_preview;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    /// Accepted for forward compatibility; the analyzer prompt does not
    /// use it yet.
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub summary: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Serialize)]
pub struct AnalyzeFailure {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    if request.text.trim().is_empty() {
        tracing::warn!("Analyze request with empty document text");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "Document text must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(text = %text_preview(&request.text), "Processing document analysis");

    match state.analysis_service.analyze(&request.text).await {
        Ok(analysis) => (
            StatusCode::OK,
            Json(AnalyzeResponse {
                summary: analysis.summary,
                highlights: analysis.highlights,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Document analysis failed");
            // The web frontend expects 200 with an error field on this
            // route; every other route uses proper error statuses.
            (
                StatusCode::OK,
                Json(AnalyzeFailure {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
