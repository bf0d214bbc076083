use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::text_preview;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct AskRequest {
    pub document_text: String,
    pub question: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    if request.document_text.trim().is_empty() || request.question.trim().is_empty() {
        tracing::warn!("Ask request with empty document text or question");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "Both document_text and question are required".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(question = %text_preview(&request.question), "Processing document question");

    match state
        .analysis_service
        .answer_question(&request.document_text, &request.question)
        .await
    {
        Ok(answer) => (StatusCode::OK, Json(AskResponse { answer })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Question answering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Question answering failed: {e}"),
                }),
            )
                .into_response()
        }
    }
}
