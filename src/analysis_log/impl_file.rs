use crate::analysis_log::interface::{AnalysisLog, LogEntry};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub struct AnalysisLogFile {
    path: PathBuf,
}

impl AnalysisLogFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AnalysisLog for AnalysisLogFile {
    fn append(&self, entry: &LogEntry) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(entry.to_record().as_bytes())?;

        Ok(())
    }
}
