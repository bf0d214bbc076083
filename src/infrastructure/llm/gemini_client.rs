use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{LlmClient, LlmClientError};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini chat-completion client over the `generateContent` REST surface.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, temperature: f32) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, model, temperature)
    }

    /// Endpoint override for tests against a stub server.
    pub fn with_endpoint(endpoint: &str, api_key: &str, model: &str, temperature: f32) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            temperature,
        }
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model, chars = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": self.temperature },
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("Gemini request failed: {e}")))?;

        if response.status().as_u16() == 429 {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "Gemini returned {status}: {body}"
            )));
        }

        let result: GenerateContentResponse = response.json().await.map_err(|e| {
            LlmClientError::InvalidResponse(format!("Gemini response parse failed: {e}"))
        })?;

        result
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                LlmClientError::InvalidResponse("Gemini response contained no candidates".to_string())
            })
    }
}

#[derive(Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Deserialize)]
pub struct ContentPart {
    pub text: String,
}
