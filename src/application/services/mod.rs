mod analysis_service;
mod insights_service;
mod speech_service;
mod translation_service;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use insights_service::InsightsService;
pub use speech_service::{
    MAX_SYNTHESIS_CHARS, SpeechService, SynthesizedSpeech, TRUNCATION_SUFFIX,
};
pub use translation_service::{DocumentTranslation, SummaryTranslation, TranslationService};
