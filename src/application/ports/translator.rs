use async_trait::async_trait;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn detect_language(&self, text: &str) -> Result<String, TranslatorError>;

    /// Translates into `target_code`, letting the service detect the source
    /// when `source_code` is `None`.
    async fn translate(
        &self,
        text: &str,
        target_code: &str,
        source_code: Option<&str>,
    ) -> Result<Translation, TranslatorError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub translated_text: String,
    pub detected_source_language: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
