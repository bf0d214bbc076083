use std::sync::Arc;

use crate::application::ports::{LanguageAnalyzer, LanguageAnalyzerError};
use crate::domain::{CloudInsights, ComplexityInsight, EntityInsight, ReadabilityScore, SentimentInsight};

const MENTIONS_PER_ENTITY: usize = 3;

/// Orchestrates the Natural Language sub-calls and derives the complexity
/// and readability figures from the syntax summary.
pub struct InsightsService {
    analyzer: Arc<dyn LanguageAnalyzer>,
}

impl InsightsService {
    pub fn new(analyzer: Arc<dyn LanguageAnalyzer>) -> Self {
        Self { analyzer }
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn document_insights(
        &self,
        text: &str,
    ) -> Result<CloudInsights, LanguageAnalyzerError> {
        let sentiment = self.analyzer.analyze_sentiment(text).await?;
        let entities = self.analyzer.analyze_entities(text).await?;
        let syntax = self.analyzer.analyze_syntax(text).await?;

        let avg_sentence_length = if syntax.sentence_count == 0 {
            0.0
        } else {
            syntax.total_tokens as f64 / syntax.sentence_count as f64
        };

        Ok(CloudInsights {
            sentiment: SentimentInsight::new(sentiment.score, sentiment.magnitude),
            entities: entities
                .into_iter()
                .map(|entity| EntityInsight {
                    name: entity.name,
                    entity_type: entity.entity_type,
                    salience: entity.salience,
                    sentiment_score: entity.sentiment_score,
                    mentions: None,
                })
                .collect(),
            complexity: ComplexityInsight {
                avg_sentence_length,
                unique_pos_tags: syntax.unique_pos_tags,
                total_tokens: syntax.total_tokens,
            },
            readability_score: ReadabilityScore::derive(
                avg_sentence_length,
                syntax.unique_pos_tags,
            ),
        })
    }

    /// Entity passthrough for the extraction endpoint, keeping the first
    /// few mentions of each entity.
    pub async fn extract_entities(
        &self,
        text: &str,
    ) -> Result<Vec<EntityInsight>, LanguageAnalyzerError> {
        let entities = self.analyzer.analyze_entities(text).await?;

        Ok(entities
            .into_iter()
            .map(|entity| EntityInsight {
                name: entity.name,
                entity_type: entity.entity_type,
                salience: entity.salience,
                sentiment_score: entity.sentiment_score,
                mentions: Some(
                    entity
                        .mentions
                        .into_iter()
                        .take(MENTIONS_PER_ENTITY)
                        .collect(),
                ),
            })
            .collect())
    }
}
