mod document_ocr;
mod language_analyzer;
mod llm_client;
mod speech_synthesizer;
mod translator;

pub use document_ocr::{DocumentOcr, DocumentOcrError};
pub use language_analyzer::{
    AnalyzedEntity, DocumentSentiment, LanguageAnalyzer, LanguageAnalyzerError, SyntaxSummary,
};
pub use llm_client::{LlmClient, LlmClientError};
pub use speech_synthesizer::{SpeechSynthesizer, SpeechSynthesizerError, VoiceSelection};
pub use translator::{Translation, Translator, TranslatorError};
