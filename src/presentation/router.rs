use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, analyze_with_docai_handler, ask_handler, enhanced_analysis_handler,
    extract_entities_handler, generate_checklist_handler, health_handler, text_to_speech_handler,
    translate_document_handler, translate_summary_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + 'static,
{
    // Fully open on purpose: this is a public-facing demo API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler::<L>))
        .route("/ask", post(ask_handler::<L>))
        .route("/generate_checklist", post(generate_checklist_handler::<L>))
        .route("/analyze_with_docai", post(analyze_with_docai_handler::<L>))
        .route("/enhanced_analysis", post(enhanced_analysis_handler::<L>))
        .route("/translate_summary", post(translate_summary_handler::<L>))
        .route("/translate_document", post(translate_document_handler::<L>))
        .route("/extract_entities", post(extract_entities_handler::<L>))
        .route("/text-to-speech", post(text_to_speech_handler::<L>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
