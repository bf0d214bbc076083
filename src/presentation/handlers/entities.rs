use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::domain::EntityInsight;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct ExtractEntitiesRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ExtractEntitiesResponse {
    pub entities: Vec<EntityInsight>,
    pub service: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn extract_entities_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<ExtractEntitiesRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    // The one read-style path that degrades instead of failing closed:
    // callers get an empty list plus an explanatory service label.
    let Some(insights_service) = &state.insights_service else {
        tracing::warn!("Natural Language client not configured");
        return (
            StatusCode::OK,
            Json(ExtractEntitiesResponse {
                entities: Vec::new(),
                service: "Natural Language API not available".to_string(),
            }),
        )
            .into_response();
    };

    match insights_service.extract_entities(&request.text).await {
        Ok(entities) => {
            tracing::info!(entities = entities.len(), "Entity extraction completed");
            (
                StatusCode::OK,
                Json(ExtractEntitiesResponse {
                    entities,
                    service: "Google Cloud Natural Language API".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Entity extraction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Entity extraction failed: {e}"),
                }),
            )
                .into_response()
        }
    }
}
