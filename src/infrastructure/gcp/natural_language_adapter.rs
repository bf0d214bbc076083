use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::application::ports::{
    AnalyzedEntity, DocumentSentiment, LanguageAnalyzer, LanguageAnalyzerError, SyntaxSummary,
};

use super::auth::GcpTokenSource;

const DEFAULT_ENDPOINT: &str = "https://language.googleapis.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Natural Language API adapter; each trait method maps to one
/// `documents:analyze*` REST call on a plain-text document.
pub struct NaturalLanguageAdapter {
    client: Client,
    endpoint: String,
    auth: GcpTokenSource,
}

impl NaturalLanguageAdapter {
    pub fn new(auth: GcpTokenSource) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, auth)
    }

    /// Endpoint override for tests against a stub server.
    pub fn with_endpoint(endpoint: &str, auth: GcpTokenSource) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            auth,
        }
    }

    async fn post_analysis<T: DeserializeOwned>(
        &self,
        method: &str,
        text: &str,
    ) -> Result<T, LanguageAnalyzerError> {
        let token = self
            .auth
            .bearer_token()
            .await
            .map_err(|e| LanguageAnalyzerError::ApiRequestFailed(format!("token: {e}")))?;

        let body = serde_json::json!({
            "document": { "type": "PLAIN_TEXT", "content": text },
            "encodingType": "UTF8",
        });
        let url = format!("{}/documents:{}", self.endpoint, method);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                LanguageAnalyzerError::ApiRequestFailed(format!(
                    "Natural Language request failed: {e}"
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let response_body = response.text().await.unwrap_or_default();
            return Err(LanguageAnalyzerError::ApiRequestFailed(format!(
                "Natural Language returned {status}: {response_body}"
            )));
        }

        response.json::<T>().await.map_err(|e| {
            LanguageAnalyzerError::InvalidResponse(format!(
                "Natural Language response parse failed: {e}"
            ))
        })
    }
}

#[async_trait]
impl LanguageAnalyzer for NaturalLanguageAdapter {
    async fn analyze_sentiment(
        &self,
        text: &str,
    ) -> Result<DocumentSentiment, LanguageAnalyzerError> {
        let result: SentimentResponse = self.post_analysis("analyzeSentiment", text).await?;
        Ok(DocumentSentiment {
            score: result.document_sentiment.score,
            magnitude: result.document_sentiment.magnitude,
        })
    }

    async fn analyze_entities(
        &self,
        text: &str,
    ) -> Result<Vec<AnalyzedEntity>, LanguageAnalyzerError> {
        let result: EntitiesResponse = self.post_analysis("analyzeEntities", text).await?;
        Ok(result
            .entities
            .into_iter()
            .map(|entity| AnalyzedEntity {
                name: entity.name,
                entity_type: entity.entity_type,
                salience: entity.salience,
                sentiment_score: entity.sentiment.map(|s| s.score),
                mentions: entity
                    .mentions
                    .into_iter()
                    .filter_map(|mention| mention.text.map(|span| span.content))
                    .collect(),
            })
            .collect())
    }

    async fn analyze_syntax(&self, text: &str) -> Result<SyntaxSummary, LanguageAnalyzerError> {
        let result: SyntaxResponse = self.post_analysis("analyzeSyntax", text).await?;
        let unique_pos_tags = result
            .tokens
            .iter()
            .map(|token| token.part_of_speech.tag.as_str())
            .collect::<HashSet<_>>()
            .len();

        Ok(SyntaxSummary {
            total_tokens: result.tokens.len(),
            sentence_count: result.sentences.len(),
            unique_pos_tags,
        })
    }
}

#[derive(Deserialize)]
pub struct SentimentResponse {
    #[serde(rename = "documentSentiment")]
    pub document_sentiment: Sentiment,
}

#[derive(Deserialize)]
pub struct Sentiment {
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub magnitude: f32,
}

#[derive(Deserialize)]
pub struct EntitiesResponse {
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub salience: f32,
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
}

#[derive(Deserialize)]
pub struct Mention {
    pub text: Option<TextSpan>,
}

#[derive(Deserialize)]
pub struct TextSpan {
    pub content: String,
}

#[derive(Deserialize)]
pub struct SyntaxResponse {
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

#[derive(Deserialize)]
pub struct Sentence {
    pub text: Option<TextSpan>,
}

#[derive(Deserialize)]
pub struct Token {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: PartOfSpeech,
}

#[derive(Deserialize)]
pub struct PartOfSpeech {
    pub tag: String,
}
