use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct ChecklistRequest {
    pub text: String,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Serialize)]
pub struct ChecklistResponse {
    pub checklist: Vec<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_checklist_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<ChecklistRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    if request.text.trim().is_empty() {
        tracing::warn!("Checklist request with empty document text");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "Document text must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    match state.analysis_service.generate_checklist(&request.text).await {
        Ok(checklist) => {
            tracing::info!(items = checklist.len(), "Checklist generated");
            (StatusCode::OK, Json(ChecklistResponse { checklist })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Checklist generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Checklist generation failed: {e}"),
                }),
            )
                .into_response()
        }
    }
}
