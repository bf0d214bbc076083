use std::sync::Arc;

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::language_code;

pub struct TranslationService {
    translator: Arc<dyn Translator>,
}

#[derive(Debug, Clone)]
pub struct SummaryTranslation {
    pub translated_summary: String,
    /// Source language as detected by the service, "unknown" when absent.
    pub source_language: String,
}

#[derive(Debug, Clone)]
pub struct DocumentTranslation {
    pub source_language: String,
    pub translated_text: String,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Summary flow: the target arrives as a human-readable language name
    /// and is resolved through the name-to-code table.
    #[tracing::instrument(skip(self, summary), fields(target = %target_language))]
    pub async fn translate_summary(
        &self,
        summary: &str,
        target_language: &str,
    ) -> Result<SummaryTranslation, TranslatorError> {
        let target_code = language_code(target_language);
        let translation = self.translator.translate(summary, &target_code, None).await?;

        Ok(SummaryTranslation {
            translated_summary: translation.translated_text,
            source_language: translation
                .detected_source_language
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    /// Whole-document flow: explicit detection first, then translation
    /// pinned to the detected source. The target is already a code here.
    #[tracing::instrument(skip(self, text), fields(chars = text.len(), target = %target_code))]
    pub async fn translate_document(
        &self,
        text: &str,
        target_code: &str,
    ) -> Result<DocumentTranslation, TranslatorError> {
        let source_language = self.translator.detect_language(text).await?;
        let translation = self
            .translator
            .translate(text, target_code, Some(&source_language))
            .await?;

        Ok(DocumentTranslation {
            source_language,
            translated_text: translation.translated_text,
        })
    }
}
