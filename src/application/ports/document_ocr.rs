use async_trait::async_trait;

/// Managed OCR processor. Takes raw file bytes plus the MIME type inferred
/// from the upload's extension and returns the extracted plain text.
#[async_trait]
pub trait DocumentOcr: Send + Sync {
    async fn process(&self, data: &[u8], mime_type: &str) -> Result<String, DocumentOcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentOcrError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
