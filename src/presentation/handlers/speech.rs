use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct TextToSpeechRequest {
    pub text: String,
    #[serde(default = "default_voice_name")]
    pub voice_name: String,
    #[serde(default = "default_language_code")]
    pub language_code: String,
}

fn default_voice_name() -> String {
    "en-US-Standard-A".to_string()
}

fn default_language_code() -> String {
    "en-US".to_string()
}

#[derive(Serialize)]
pub struct TextToSpeechResponse {
    pub audio_base64: String,
    pub audio_format: String,
    pub text_length: usize,
    pub voice_used: String,
    pub service: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn text_to_speech_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<TextToSpeechRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let Some(speech_service) = &state.speech_service else {
        tracing::warn!("Text-to-Speech client not configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                detail: "Text-to-Speech service not available".to_string(),
            }),
        )
            .into_response();
    };

    match speech_service
        .synthesize(&request.text, &request.voice_name, &request.language_code)
        .await
    {
        Ok(speech) => (
            StatusCode::OK,
            Json(TextToSpeechResponse {
                audio_base64: general_purpose::STANDARD.encode(&speech.audio),
                audio_format: "mp3".to_string(),
                text_length: speech.text_length,
                voice_used: speech.voice_used,
                service: "Google Cloud Text-to-Speech API".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Speech synthesis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Text-to-Speech conversion failed: {e}"),
                }),
            )
                .into_response()
        }
    }
}
