use crate::analysis_log::interface::{AnalysisLog, LogEntry};
use std::sync::Mutex;

pub struct AnalysisLogFake {
    entries: Mutex<Vec<LogEntry>>,
    failing: bool,
}

impl AnalysisLogFake {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl AnalysisLog for AnalysisLogFake {
    fn append(&self, entry: &LogEntry) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.failing {
            return Err("AnalysisLogFake: disk full".into());
        }
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}
