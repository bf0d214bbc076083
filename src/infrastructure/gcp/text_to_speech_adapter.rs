use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{SpeechSynthesizer, SpeechSynthesizerError, VoiceSelection};

use super::auth::GcpTokenSource;

const DEFAULT_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Text-to-Speech adapter over `text:synthesize`. Gender preference and
/// MP3 encoding are fixed; only the language and voice name vary per call.
pub struct TextToSpeechAdapter {
    client: Client,
    endpoint: String,
    auth: GcpTokenSource,
}

impl TextToSpeechAdapter {
    pub fn new(auth: GcpTokenSource) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, auth)
    }

    /// Endpoint override for tests against a stub server.
    pub fn with_endpoint(endpoint: &str, auth: GcpTokenSource) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            auth,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for TextToSpeechAdapter {
    #[tracing::instrument(skip(self, text), fields(chars = text.len(), language = %voice.language_code))]
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
    ) -> Result<Vec<u8>, SpeechSynthesizerError> {
        let token = self
            .auth
            .bearer_token()
            .await
            .map_err(|e| SpeechSynthesizerError::ApiRequestFailed(format!("token: {e}")))?;

        let mut voice_params = serde_json::json!({
            "languageCode": voice.language_code,
            "ssmlGender": "FEMALE",
        });
        if let Some(name) = &voice.voice_name {
            voice_params["name"] = serde_json::Value::String(name.clone());
        }

        let body = serde_json::json!({
            "input": { "text": text },
            "voice": voice_params,
            "audioConfig": {
                "audioEncoding": "MP3",
                "speakingRate": 1.0,
                "pitch": 0.0,
                "volumeGainDb": 0.0,
            },
        });
        let url = format!("{}/text:synthesize", self.endpoint);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                SpeechSynthesizerError::ApiRequestFailed(format!(
                    "Text-to-Speech request failed: {e}"
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechSynthesizerError::ApiRequestFailed(format!(
                "Text-to-Speech returned {status}: {body}"
            )));
        }

        let result: SynthesizeResponse = response.json().await.map_err(|e| {
            SpeechSynthesizerError::InvalidResponse(format!(
                "Text-to-Speech response parse failed: {e}"
            ))
        })?;

        general_purpose::STANDARD
            .decode(result.audio_content.as_bytes())
            .map_err(|e| {
                SpeechSynthesizerError::InvalidResponse(format!("audio content decode failed: {e}"))
            })
    }
}

#[derive(Deserialize)]
pub struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    pub audio_content: String,
}
