use crate::result_policy::{percent, AnalysisResult};
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<FixedOffset>,
    pub source_filename: String,
    pub is_positive: bool,
    pub raw_score: f32,
    pub confidence: f32,
}

impl LogEntry {
    pub fn new(result: &AnalysisResult, source_filename: &str) -> Self {
        Self {
            timestamp: result.timestamp,
            source_filename: source_filename.to_string(),
            is_positive: result.is_positive,
            raw_score: result.raw_score,
            confidence: result.confidence,
        }
    }

    pub fn to_record(&self) -> String {
        let rule = "=".repeat(60);
        let status = if self.is_positive {
            "TUMOR DETECTED"
        } else {
            "NO TUMOR"
        };

        format!(
            "\n{rule}\nDate: {}\nImage: {}\nResult: {}\nProbability: {}\nConfidence: {}\n{rule}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.source_filename,
            status,
            percent(self.raw_score),
            percent(self.confidence),
        )
    }
}

pub trait AnalysisLog: Send + Sync {
    fn append(&self, entry: &LogEntry) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
