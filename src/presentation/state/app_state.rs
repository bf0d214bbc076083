use std::sync::Arc;

use crate::application::ports::{DocumentOcr, LlmClient};
use crate::application::services::{
    AnalysisService, InsightsService, SpeechService, TranslationService,
};

/// Shared handler state, built once at startup and cloned per request.
///
/// The LLM path is always present; each Google Cloud service is `None`
/// when its credentials never resolved, and the handlers decide per
/// endpoint whether that fails closed or degrades.
pub struct AppState<L>
where
    L: LlmClient,
{
    pub analysis_service: Arc<AnalysisService<L>>,
    pub document_ocr: Option<Arc<dyn DocumentOcr>>,
    pub insights_service: Option<Arc<InsightsService>>,
    pub translation_service: Option<Arc<TranslationService>>,
    pub speech_service: Option<Arc<SpeechService>>,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            document_ocr: self.document_ocr.clone(),
            insights_service: self.insights_service.clone(),
            translation_service: self.translation_service.clone(),
            speech_service: self.speech_service.clone(),
        }
    }
}
