use async_trait::async_trait;

/// Voice-synthesis service returning MP3-encoded audio bytes.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
    ) -> Result<Vec<u8>, SpeechSynthesizerError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSelection {
    pub language_code: String,
    /// The provider picks its best voice for the language when `None`.
    pub voice_name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechSynthesizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
