use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use legalens::application::ports::{DocumentOcr, LanguageAnalyzer, SpeechSynthesizer, Translator};
use legalens::application::services::{
    AnalysisService, InsightsService, SpeechService, TranslationService,
};
use legalens::infrastructure::gcp::{
    DocumentAiAdapter, GcpTokenSource, NaturalLanguageAdapter, TextToSpeechAdapter,
    TranslateAdapter,
};
use legalens::infrastructure::llm::GeminiClient;
use legalens::infrastructure::observability::init_tracing;
use legalens::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(&settings.logging.environment, settings.logging.json_format);

    let llm_client = Arc::new(GeminiClient::new(
        &settings.llm.api_key,
        &settings.llm.model,
        settings.llm.temperature,
    ));
    let analysis_service = Arc::new(AnalysisService::new(llm_client));

    // Missing Google Cloud credentials disable the cloud adapters without
    // taking the LLM endpoints down; each affected handler then answers
    // with its own unavailable policy.
    let (document_ocr, insights_service, translation_service, speech_service) =
        match GcpTokenSource::from_settings(&settings.google_cloud).await {
            Ok(auth) => {
                tracing::info!("Google Cloud credentials resolved");
                let document_ocr: Arc<dyn DocumentOcr> = Arc::new(DocumentAiAdapter::new(
                    &settings.google_cloud.project_id,
                    &settings.google_cloud.location,
                    &settings.google_cloud.docai_processor_id,
                    auth.clone(),
                ));
                let analyzer: Arc<dyn LanguageAnalyzer> =
                    Arc::new(NaturalLanguageAdapter::new(auth.clone()));
                let translator: Arc<dyn Translator> = Arc::new(TranslateAdapter::new(auth.clone()));
                let synthesizer: Arc<dyn SpeechSynthesizer> =
                    Arc::new(TextToSpeechAdapter::new(auth));

                (
                    Some(document_ocr),
                    Some(Arc::new(InsightsService::new(analyzer))),
                    Some(Arc::new(TranslationService::new(translator))),
                    Some(Arc::new(SpeechService::new(synthesizer))),
                )
            }
            Err(e) => {
                tracing::warn!(error = %e, "Google Cloud credentials unavailable, cloud endpoints disabled");
                (None, None, None, None)
            }
        };

    let state = AppState {
        analysis_service,
        document_ocr,
        insights_service,
        translation_service,
        speech_service,
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
