use serde::{Deserialize, Serialize};

/// Resume assessment: a 0-100 score with cleaned strength/improvement
/// bullet lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub points: i64,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}
