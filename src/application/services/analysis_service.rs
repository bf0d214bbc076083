use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::DocumentAnalysis;

/// Schema instructions appended to the analyzer prompt. The category list
/// is closed; a response outside it fails deserialization.
const ANALYZER_FORMAT_INSTRUCTIONS: &str = r#"Respond with a single JSON object and nothing else, matching this schema exactly:
{
  "summary": "A concise, easy-to-understand summary of the entire document.",
  "highlights": [
    {
      "text": "The exact text from the document to be highlighted.",
      "category": "The risk category. Must be one of: 'High-Risk', 'Cautionary', 'Standard'.",
      "explanation": "A simple, one-sentence explanation of why this is important."
    }
  ]
}"#;

fn analyzer_prompt(document_text: &str) -> String {
    format!(
        "Analyze the legal document below. Provide a summary and identify key clauses by risk level.\n\
         DOCUMENT TEXT:\n\
         ---\n\
         {document_text}\n\
         ---\n\
         {ANALYZER_FORMAT_INSTRUCTIONS}"
    )
}

fn qa_prompt(document_text: &str, question: &str) -> String {
    format!(
        "Based ONLY on the document text provided below, answer the user's question. \
         If the answer is not found, state that clearly.\n\
         DOCUMENT CONTEXT:\n\
         ---\n\
         {document_text}\n\
         ---\n\
         USER'S QUESTION: {question}"
    )
}

fn checklist_prompt(document_text: &str) -> String {
    format!(
        "Analyze the following legal document. Extract a checklist of all the key obligations, \
         responsibilities, and actions required of the primary user or 'Receiving Party'. \
         Return the checklist as a JSON array of strings.\n\
         DOCUMENT TEXT:\n\
         ---\n\
         {document_text}\n\
         ---\n\
         JSON FORMAT: {{\"checklist\": [\"Action item 1\", \"Action item 2\", ...]}}"
    )
}

/// Gemini wraps JSON answers in a markdown fence more often than not,
/// even when told not to. Strip it before handing the text to serde.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// LLM-backed document analysis: summary + risk highlights, free-text
/// question answering, and checklist generation. Each operation is one
/// prompt, one completion, one parse.
pub struct AnalysisService<L: LlmClient> {
    llm_client: Arc<L>,
}

impl<L: LlmClient> AnalysisService<L> {
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip(self, document_text), fields(chars = document_text.len()))]
    pub async fn analyze(&self, document_text: &str) -> Result<DocumentAnalysis, AnalysisError> {
        let prompt = analyzer_prompt(document_text);
        let raw = self.llm_client.complete(&prompt).await?;

        let analysis: DocumentAnalysis = serde_json::from_str(strip_code_fence(&raw))
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;

        tracing::info!(
            highlights = analysis.highlights.len(),
            "Document analysis completed"
        );

        Ok(analysis)
    }

    pub async fn answer_question(
        &self,
        document_text: &str,
        question: &str,
    ) -> Result<String, AnalysisError> {
        let prompt = qa_prompt(document_text, question);
        let answer = self.llm_client.complete(&prompt).await?;
        Ok(answer)
    }

    pub async fn generate_checklist(
        &self,
        document_text: &str,
    ) -> Result<Vec<String>, AnalysisError> {
        let prompt = checklist_prompt(document_text);
        let raw = self.llm_client.complete(&prompt).await?;

        let parsed: ChecklistPayload = serde_json::from_str(strip_code_fence(&raw))
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;

        Ok(parsed.checklist)
    }
}

#[derive(serde::Deserialize)]
struct ChecklistPayload {
    checklist: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("model output did not match the expected schema: {0}")]
    Parse(String),
}
