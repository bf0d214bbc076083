mod analyze;
mod ask;
mod checklist;
mod docai;
mod enhanced;
mod entities;
mod health;
mod speech;
mod translate;

use serde::Serialize;

pub use analyze::analyze_handler;
pub use ask::ask_handler;
pub use checklist::generate_checklist_handler;
pub use docai::analyze_with_docai_handler;
pub use enhanced::enhanced_analysis_handler;
pub use entities::extract_entities_handler;
pub use health::health_handler;
pub use speech::text_to_speech_handler;
pub use translate::{translate_document_handler, translate_summary_handler};

/// Error body shared by every failing route except `/analyze`, which
/// keeps its own 200-with-error contract.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
