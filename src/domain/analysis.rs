use serde::{Deserialize, Serialize};

use super::highlight::Highlight;

/// Result of one analyzer run; lives for a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub summary: String,
    pub highlights: Vec<Highlight>,
}
