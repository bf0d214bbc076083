use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::Highlight;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct TranslateSummaryRequest {
    pub summary: String,
    pub target_language: String,
}

#[derive(Serialize)]
pub struct TranslateSummaryResponse {
    pub original_summary: String,
    pub translated_summary: String,
    pub source_language: String,
    pub target_language: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn translate_summary_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<TranslateSummaryRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let Some(translation_service) = &state.translation_service else {
        tracing::warn!("Translation client not configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                detail: "Translation service not available".to_string(),
            }),
        )
            .into_response();
    };

    match translation_service
        .translate_summary(&request.summary, &request.target_language)
        .await
    {
        Ok(translation) => (
            StatusCode::OK,
            Json(TranslateSummaryResponse {
                original_summary: request.summary,
                translated_summary: translation.translated_summary,
                source_language: translation.source_language,
                target_language: request.target_language,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Summary translation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Translation failed: {e}"),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct TranslateDocumentRequest {
    pub text: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_target_language() -> String {
    "es".to_string()
}

#[derive(Serialize)]
pub struct TranslateDocumentResponse {
    pub original_language: String,
    pub target_language: String,
    pub translated_text: String,
    pub analysis: TranslatedAnalysis,
    pub service: String,
}

#[derive(Serialize)]
pub struct TranslatedAnalysis {
    pub summary: String,
    pub highlights: Vec<Highlight>,
}

#[tracing::instrument(skip(state, request))]
pub async fn translate_document_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<TranslateDocumentRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let Some(translation_service) = &state.translation_service else {
        tracing::warn!("Translation client not configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                detail: "Translation service not available".to_string(),
            }),
        )
            .into_response();
    };

    let translation = match translation_service
        .translate_document(&request.text, &request.target_language)
        .await
    {
        Ok(translation) => translation,
        Err(e) => {
            tracing::error!(error = %e, "Document translation failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Translation failed: {e}"),
                }),
            )
                .into_response();
        }
    };

    // The translated document goes back through the analyzer so the
    // caller gets highlights in the target language.
    match state
        .analysis_service
        .analyze(&translation.translated_text)
        .await
    {
        Ok(analysis) => (
            StatusCode::OK,
            Json(TranslateDocumentResponse {
                original_language: translation.source_language,
                target_language: request.target_language,
                translated_text: translation.translated_text,
                analysis: TranslatedAnalysis {
                    summary: analysis.summary,
                    highlights: analysis.highlights,
                },
                service: "Google Cloud Translation API".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Analysis of translated document failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Translation failed: {e}"),
                }),
            )
                .into_response()
        }
    }
}
