use std::sync::{Arc, Mutex};

use legalens::application::ports::{LlmClient, LlmClientError};
use legalens::application::services::{AnalysisError, AnalysisService};
use legalens::domain::RiskCategory;

/// Replays a canned completion and records every prompt it was given.
struct ScriptedLlmClient {
    completion: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlmClient {
    fn new(completion: &str) -> Self {
        Self {
            completion: completion.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.completion.clone())
    }
}

#[tokio::test]
async fn given_plain_json_completion_when_analyzing_then_parses_highlights() {
    let completion = r#"{"summary": "Short.", "highlights": [{"text": "clause", "category": "Standard", "explanation": "Routine term."}]}"#;
    let client = Arc::new(ScriptedLlmClient::new(completion));
    let service = AnalysisService::new(Arc::clone(&client));

    let analysis = service.analyze("Some contract text").await.unwrap();

    assert_eq!(analysis.summary, "Short.");
    assert_eq!(analysis.highlights.len(), 1);
    assert_eq!(analysis.highlights[0].category, RiskCategory::Standard);
}

#[tokio::test]
async fn given_fenced_json_completion_when_analyzing_then_strips_fence() {
    let completion = "```json\n{\"summary\": \"Short.\", \"highlights\": []}\n```";
    let client = Arc::new(ScriptedLlmClient::new(completion));
    let service = AnalysisService::new(client);

    let analysis = service.analyze("Some contract text").await.unwrap();

    assert_eq!(analysis.summary, "Short.");
    assert!(analysis.highlights.is_empty());
}

#[tokio::test]
async fn given_category_outside_contract_when_analyzing_then_parse_error() {
    let completion = r#"{"summary": "Short.", "highlights": [{"text": "clause", "category": "Severe", "explanation": "?"}]}"#;
    let client = Arc::new(ScriptedLlmClient::new(completion));
    let service = AnalysisService::new(client);

    let result = service.analyze("Some contract text").await;

    assert!(matches!(result, Err(AnalysisError::Parse(_))));
}

#[tokio::test]
async fn given_document_when_analyzing_then_prompt_embeds_the_document() {
    let completion = r#"{"summary": "Short.", "highlights": []}"#;
    let client = Arc::new(ScriptedLlmClient::new(completion));
    let service = AnalysisService::new(Arc::clone(&client));

    service.analyze("the quick brown clause").await.unwrap();

    let prompts = client.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("DOCUMENT TEXT"));
    assert!(prompts[0].contains("the quick brown clause"));
    assert!(prompts[0].contains("High-Risk"));
}

#[tokio::test]
async fn given_question_when_asking_then_answer_is_returned_verbatim() {
    let client = Arc::new(ScriptedLlmClient::new("The term is two years."));
    let service = AnalysisService::new(Arc::clone(&client));

    let answer = service
        .answer_question("contract text", "How long is the term?")
        .await
        .unwrap();

    assert_eq!(answer, "The term is two years.");

    let prompts = client.prompts.lock().unwrap();
    assert!(prompts[0].contains("USER'S QUESTION: How long is the term?"));
    assert!(prompts[0].contains("contract text"));
}

#[tokio::test]
async fn given_checklist_json_when_generating_then_returns_items_in_order() {
    let completion = r#"{"checklist": ["Keep information confidential", "Return materials on request"]}"#;
    let client = Arc::new(ScriptedLlmClient::new(completion));
    let service = AnalysisService::new(client);

    let checklist = service.generate_checklist("contract text").await.unwrap();

    assert_eq!(
        checklist,
        vec![
            "Keep information confidential".to_string(),
            "Return materials on request".to_string(),
        ]
    );
}

#[tokio::test]
async fn given_prose_completion_when_generating_checklist_then_parse_error() {
    let client = Arc::new(ScriptedLlmClient::new("Here is your checklist: ..."));
    let service = AnalysisService::new(client);

    let result = service.generate_checklist("contract text").await;

    assert!(matches!(result, Err(AnalysisError::Parse(_))));
}
