mod auth;
mod document_ai_adapter;
mod natural_language_adapter;
mod text_to_speech_adapter;
mod translate_adapter;

pub use auth::GcpTokenSource;
pub use document_ai_adapter::{DocumentAiAdapter, ProcessResponse, ProcessedDocument};
pub use natural_language_adapter::{
    EntitiesResponse, NaturalLanguageAdapter, SentimentResponse, SyntaxResponse,
};
pub use text_to_speech_adapter::{SynthesizeResponse, TextToSpeechAdapter};
pub use translate_adapter::{DetectResponse, TranslateAdapter, TranslateResponse};
