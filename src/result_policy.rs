use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub is_positive: bool,
    pub raw_score: f32,
    /// Probability assigned to the chosen label.
    pub confidence: f32,
    pub timestamp: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultPolicy {
    pub threshold: f32,
}

impl ResultPolicy {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn classify(&self, score: f32) -> AnalysisResult {
        self.classify_at(score, chrono::Local::now().fixed_offset())
    }

    /// A score equal to the threshold is negative.
    pub fn classify_at(&self, score: f32, timestamp: DateTime<FixedOffset>) -> AnalysisResult {
        let is_positive = score > self.threshold;
        let confidence = if is_positive { score } else { 1.0 - score };

        AnalysisResult {
            is_positive,
            raw_score: score,
            confidence,
            timestamp,
        }
    }
}

pub fn label(is_positive: bool) -> &'static str {
    if is_positive {
        "TUMOR DETECTED"
    } else {
        "NO TUMOR DETECTED"
    }
}

pub fn percent(value: f32) -> String {
    format!("{:.2}%", value * 100.0)
}

pub fn format_report(result: &AnalysisResult) -> String {
    let (status, recommendation) = if result.is_positive {
        (
            "!! TUMOR DETECTED",
            "A tumor was detected on this MRI scan.\n\n\
             RECOMMENDATION:\n\
             Please consult a specialist physician promptly\n\
             for a complete evaluation and a professional diagnosis.",
        )
    } else {
        (
            "OK NO TUMOR DETECTED",
            "No tumor was detected on this MRI scan.\n\n\
             NOTE:\n\
             This result is an AI prediction and is not a substitute\n\
             for a professional medical diagnosis.",
        )
    };

    let rule = "=".repeat(56);

    format!(
        "{rule}\n  {status}\n{rule}\n\n\
         ANALYSIS DETAILS:\n   \
         - Tumor probability: {probability}\n   \
         - Confidence: {confidence}\n   \
         - Analysis date: {date}\n\n\
         {recommendation}\n\n\
         WARNING:\n\
         This application uses an artificial intelligence model for\n\
         educational and research purposes only. Its results must never\n\
         replace the opinion of a qualified healthcare professional.\n",
        probability = percent(result.raw_score),
        confidence = percent(result.confidence),
        date = result.timestamp.format("%d/%m/%Y at %H:%M:%S"),
    )
}
