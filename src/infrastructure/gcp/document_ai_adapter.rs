use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{DocumentOcr, DocumentOcrError};

use super::auth::GcpTokenSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Document AI OCR over the synchronous `:process` REST call. The
/// processor is a managed pipeline identified by an opaque id.
pub struct DocumentAiAdapter {
    client: Client,
    endpoint: String,
    processor_path: String,
    auth: GcpTokenSource,
}

impl DocumentAiAdapter {
    pub fn new(project_id: &str, location: &str, processor_id: &str, auth: GcpTokenSource) -> Self {
        let endpoint = format!("https://{location}-documentai.googleapis.com/v1");
        Self::with_endpoint(&endpoint, project_id, location, processor_id, auth)
    }

    /// Endpoint override for tests against a stub server.
    pub fn with_endpoint(
        endpoint: &str,
        project_id: &str,
        location: &str,
        processor_id: &str,
        auth: GcpTokenSource,
    ) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            processor_path: format!(
                "projects/{project_id}/locations/{location}/processors/{processor_id}"
            ),
            auth,
        }
    }
}

#[async_trait]
impl DocumentOcr for DocumentAiAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len(), mime_type = %mime_type))]
    async fn process(&self, data: &[u8], mime_type: &str) -> Result<String, DocumentOcrError> {
        let token = self
            .auth
            .bearer_token()
            .await
            .map_err(|e| DocumentOcrError::ApiRequestFailed(format!("token: {e}")))?;

        let body = serde_json::json!({
            "rawDocument": {
                "content": general_purpose::STANDARD.encode(data),
                "mimeType": mime_type,
            }
        });
        let url = format!("{}/{}:process", self.endpoint, self.processor_path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DocumentOcrError::ApiRequestFailed(format!("Document AI request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DocumentOcrError::ApiRequestFailed(format!(
                "Document AI returned {status}: {body}"
            )));
        }

        let result: ProcessResponse = response.json().await.map_err(|e| {
            DocumentOcrError::InvalidResponse(format!("Document AI response parse failed: {e}"))
        })?;

        let text = result.document.map(|d| d.text).unwrap_or_default();

        tracing::info!(chars = text.len(), "Document AI extraction completed");

        Ok(text)
    }
}

#[derive(Deserialize)]
pub struct ProcessResponse {
    pub document: Option<ProcessedDocument>,
}

#[derive(Deserialize)]
pub struct ProcessedDocument {
    #[serde(default)]
    pub text: String,
}
