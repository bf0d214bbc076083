mod analysis;
mod document;
mod highlight;
mod insights;
mod language;

pub use analysis::DocumentAnalysis;
pub use document::DocumentKind;
pub use highlight::{Highlight, RiskCategory};
pub use insights::{
    CloudInsights, ComplexityInsight, EntityInsight, ReadabilityScore, SentimentInsight,
};
pub use language::language_code;
