use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, SpeechSynthesizerError, VoiceSelection};

/// Upstream synthesis limit; longer inputs are clipped, not rejected.
pub const MAX_SYNTHESIS_CHARS: usize = 5000;
pub const TRUNCATION_SUFFIX: &str = "... (text truncated for audio)";

pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

#[derive(Debug, Clone)]
pub struct SynthesizedSpeech {
    pub audio: Vec<u8>,
    /// Character count of the text actually synthesized, suffix included.
    pub text_length: usize,
    pub voice_used: String,
}

impl SpeechService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    /// Clamps input to the synthesis cap, marking clipped text so listeners
    /// know the audio is partial.
    pub fn prepare_text(text: &str) -> String {
        if text.chars().count() <= MAX_SYNTHESIS_CHARS {
            return text.to_string();
        }
        let mut clipped: String = text.chars().take(MAX_SYNTHESIS_CHARS).collect();
        clipped.push_str(TRUNCATION_SUFFIX);
        clipped
    }

    /// Two attempts at most: the named voice first, then the provider's
    /// default voice for the language. A second failure propagates.
    #[tracing::instrument(skip(self, text), fields(chars = text.len(), voice = %voice_name))]
    pub async fn synthesize(
        &self,
        text: &str,
        voice_name: &str,
        language_code: &str,
    ) -> Result<SynthesizedSpeech, SpeechSynthesizerError> {
        let text_to_convert = Self::prepare_text(text);
        let text_length = text_to_convert.chars().count();

        let named_voice = VoiceSelection {
            language_code: language_code.to_string(),
            voice_name: Some(voice_name.to_string()),
        };

        match self.synthesizer.synthesize(&text_to_convert, &named_voice).await {
            Ok(audio) => Ok(SynthesizedSpeech {
                audio,
                text_length,
                voice_used: voice_name.to_string(),
            }),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    voice = %voice_name,
                    "Named voice failed, retrying with the language default"
                );

                let fallback_voice = VoiceSelection {
                    language_code: language_code.to_string(),
                    voice_name: None,
                };
                let audio = self
                    .synthesizer
                    .synthesize(&text_to_convert, &fallback_voice)
                    .await?;

                Ok(SynthesizedSpeech {
                    audio,
                    text_length,
                    voice_used: format!("default ({language_code})"),
                })
            }
        }
    }
}
