use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{Translation, Translator, TranslatorError};

use super::auth::GcpTokenSource;

const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Translation v2 adapter: `detect` for language detection and the root
/// resource for translation, both plain-text format.
pub struct TranslateAdapter {
    client: Client,
    endpoint: String,
    auth: GcpTokenSource,
}

impl TranslateAdapter {
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

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, TranslatorError> {
        let token = self
            .auth
            .bearer_token()
            .await
            .map_err(|e| TranslatorError::ApiRequestFailed(format!("token: {e}")))?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&token)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                TranslatorError::ApiRequestFailed(format!("Translation request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let response_body = response.text().await.unwrap_or_default();
            return Err(TranslatorError::ApiRequestFailed(format!(
                "Translation returned {status}: {response_body}"
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl Translator for TranslateAdapter {
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    async fn detect_language(&self, text: &str) -> Result<String, TranslatorError> {
        let body = serde_json::json!({ "q": text });
        let url = format!("{}/detect", self.endpoint);

        let response = self.post_json(&url, &body).await?;
        let result: DetectResponse = response.json().await.map_err(|e| {
            TranslatorError::InvalidResponse(format!("detect response parse failed: {e}"))
        })?;

        result
            .data
            .detections
            .into_iter()
            .flatten()
            .next()
            .map(|detection| detection.language)
            .ok_or_else(|| {
                TranslatorError::InvalidResponse(
                    "detect response contained no detections".to_string(),
                )
            })
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.len(), target = %target_code))]
    async fn translate(
        &self,
        text: &str,
        target_code: &str,
        source_code: Option<&str>,
    ) -> Result<Translation, TranslatorError> {
        let mut body = serde_json::json!({
            "q": text,
            "target": target_code,
            "format": "text",
        });
        if let Some(source) = source_code {
            body["source"] = serde_json::Value::String(source.to_string());
        }

        let response = self.post_json(&self.endpoint, &body).await?;
        let result: TranslateResponse = response.json().await.map_err(|e| {
            TranslatorError::InvalidResponse(format!("translate response parse failed: {e}"))
        })?;

        let first = result.data.translations.into_iter().next().ok_or_else(|| {
            TranslatorError::InvalidResponse(
                "translate response contained no translations".to_string(),
            )
        })?;

        Ok(Translation {
            translated_text: first.translated_text,
            detected_source_language: first.detected_source_language,
        })
    }
}

#[derive(Deserialize)]
pub struct TranslateResponse {
    pub data: TranslationsData,
}

#[derive(Deserialize)]
pub struct TranslationsData {
    #[serde(default)]
    pub translations: Vec<TranslatedItem>,
}

#[derive(Deserialize)]
pub struct TranslatedItem {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    #[serde(rename = "detectedSourceLanguage")]
    pub detected_source_language: Option<String>,
}

#[derive(Deserialize)]
pub struct DetectResponse {
    pub data: DetectionsData,
}

#[derive(Deserialize)]
pub struct DetectionsData {
    #[serde(default)]
    pub detections: Vec<Vec<Detection>>,
}

#[derive(Deserialize)]
pub struct Detection {
    pub language: String,
}
