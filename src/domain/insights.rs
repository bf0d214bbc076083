use serde::Serialize;

/// Insights assembled from the Natural Language sub-calls, merged into
/// the enhanced-analysis payload alongside the LLM result.
#[derive(Debug, Clone, Serialize)]
pub struct CloudInsights {
    pub sentiment: SentimentInsight,
    pub entities: Vec<EntityInsight>,
    pub complexity: ComplexityInsight,
    pub readability_score: ReadabilityScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentInsight {
    pub score: f32,
    pub magnitude: f32,
    pub interpretation: String,
}

impl SentimentInsight {
    pub fn new(score: f32, magnitude: f32) -> Self {
        let interpretation = if score > 0.1 {
            "Positive"
        } else if score < -0.1 {
            "Negative"
        } else {
            "Neutral"
        };
        Self {
            score,
            magnitude,
            interpretation: interpretation.to_string(),
        }
    }
}

/// Named entity as exposed over the API. `mentions` is populated only by
/// the entity-extraction endpoint, not by enhanced analysis.
#[derive(Debug, Clone, Serialize)]
pub struct EntityInsight {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub salience: f32,
    pub sentiment_score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplexityInsight {
    pub avg_sentence_length: f64,
    pub unique_pos_tags: usize,
    pub total_tokens: usize,
}

/// House readability heuristic: a weighted blend of sentence length and
/// part-of-speech diversity. The weights and bucket boundaries are
/// calibration values, not a published readability index, and clients
/// depend on them as-is.
#[derive(Debug, Clone, Serialize)]
pub struct ReadabilityScore {
    pub score: f64,
    pub level: String,
}

impl ReadabilityScore {
    pub fn derive(avg_sentence_length: f64, unique_pos_tags: usize) -> Self {
        let raw = avg_sentence_length * 0.6 + unique_pos_tags as f64 * 0.4;
        Self {
            score: (raw * 100.0).round() / 100.0,
            level: Self::level_for(raw).to_string(),
        }
    }

    pub fn level_for(score: f64) -> &'static str {
        if score < 15.0 {
            "Easy to read"
        } else if score < 25.0 {
            "Moderate complexity"
        } else {
            "Complex legal language"
        }
    }
}
