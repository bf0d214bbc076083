use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::{CloudInsights, Highlight};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct EnhancedAnalysisRequest {
    pub text: String,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Serialize)]
pub struct EnhancedAnalysisResponse {
    pub summary: String,
    pub highlights: Vec<Highlight>,
    pub google_cloud_insights: InsightsPayload,
    pub processing_method: String,
}

/// The insights branch degrades instead of failing: on any error the
/// payload carries an error object and the request still succeeds.
#[derive(Serialize)]
#[serde(untagged)]
pub enum InsightsPayload {
    Insights(CloudInsights),
    Unavailable { error: String },
}

#[tracing::instrument(skip(state, request))]
pub async fn enhanced_analysis_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<EnhancedAnalysisRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    if request.text.trim().is_empty() {
        tracing::warn!("Enhanced analysis request with empty document text");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "Document text must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    let insights = match &state.insights_service {
        Some(service) => match service.document_insights(&request.text).await {
            Ok(insights) => InsightsPayload::Insights(insights),
            Err(e) => {
                tracing::warn!(error = %e, "Cloud insights degraded to error payload");
                InsightsPayload::Unavailable {
                    error: format!("Natural Language API failed: {e}"),
                }
            }
        },
        None => InsightsPayload::Unavailable {
            error: "Natural Language API not available".to_string(),
        },
    };

    // The LLM branch is not caught: its failure fails the request.
    let analysis = match state.analysis_service.analyze(&request.text).await {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::error!(error = %e, "Enhanced analysis failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Enhanced analysis failed: {e}"),
                }),
            )
                .into_response();
        }
    };

    let processing_method = match &insights {
        InsightsPayload::Insights(_) => "Google Gemini + Natural Language API",
        InsightsPayload::Unavailable { .. } => "Google Gemini Only",
    };

    (
        StatusCode::OK,
        Json(EnhancedAnalysisResponse {
            summary: analysis.summary,
            highlights: analysis.highlights,
            google_cloud_insights: insights,
            processing_method: processing_method.to_string(),
        }),
    )
        .into_response()
}
