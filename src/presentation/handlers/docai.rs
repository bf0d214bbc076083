use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::domain::{DocumentKind, Highlight};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct DocAiResponse {
    pub summary: String,
    pub highlights: Vec<Highlight>,
    pub extracted_text: String,
    pub processing_method: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_with_docai_handler<L>(
    State(state): State<AppState<L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Document AI request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    detail: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    detail: format!("Failed to read multipart: {e}"),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();

    // The extension decides everything; an unsupported upload never
    // reaches the network.
    let kind = match DocumentKind::from_filename(&filename) {
        Some(kind) => kind,
        None => {
            tracing::warn!(filename = %filename, "Unsupported file type");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    detail: "Unsupported file type for Document AI OCR.".to_string(),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    detail: format!("Failed to read file: {e}"),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), mime_type = %kind.as_mime(), "Processing file upload");

    let Some(document_ocr) = &state.document_ocr else {
        tracing::error!("Document AI client not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: "Document AI not configured correctly.".to_string(),
            }),
        )
            .into_response();
    };

    let extracted_text = match document_ocr.process(&data, kind.as_mime()).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "Document AI extraction failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Document AI processing failed: {e}"),
                }),
            )
                .into_response();
        }
    };

    if extracted_text.trim().is_empty() {
        tracing::warn!(filename = %filename, "OCR produced no text");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                detail: "No text extracted. Make sure you are using a Document OCR processor \
                         and the file is not blank."
                    .to_string(),
            }),
        )
            .into_response();
    }

    match state.analysis_service.analyze(&extracted_text).await {
        Ok(analysis) => (
            StatusCode::OK,
            Json(DocAiResponse {
                summary: analysis.summary,
                highlights: analysis.highlights,
                extracted_text,
                processing_method: "Google Cloud Document AI OCR".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Analysis of extracted text failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Document AI processing failed: {e}"),
                }),
            )
                .into_response()
        }
    }
}
