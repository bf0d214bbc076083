use async_trait::async_trait;

/// Natural-language analysis service: sentiment, entities, and syntax as
/// three independent sub-calls.
#[async_trait]
pub trait LanguageAnalyzer: Send + Sync {
    async fn analyze_sentiment(&self, text: &str)
    -> Result<DocumentSentiment, LanguageAnalyzerError>;

    async fn analyze_entities(&self, text: &str)
    -> Result<Vec<AnalyzedEntity>, LanguageAnalyzerError>;

    async fn analyze_syntax(&self, text: &str) -> Result<SyntaxSummary, LanguageAnalyzerError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSentiment {
    pub score: f32,
    pub magnitude: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedEntity {
    pub name: String,
    pub entity_type: String,
    pub salience: f32,
    /// Only populated when the upstream call includes entity sentiment.
    pub sentiment_score: Option<f32>,
    pub mentions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxSummary {
    pub total_tokens: usize,
    pub sentence_count: usize,
    pub unique_pos_tags: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LanguageAnalyzerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
