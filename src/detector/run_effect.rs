use crate::analysis_log::interface::AnalysisLog;
use crate::analyzer::Analyzer;
use crate::config::Config;
use crate::detector::core::{Effect, Event, LoadedImage};
use crate::error::DetectorError;
use crate::library::logger::interface::Logger;
use crate::preview::load_preview;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    analyzer: Arc<Analyzer>,
    analysis_log: Arc<dyn AnalysisLog + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        analyzer: Arc<Analyzer>,
        analysis_log: Arc<dyn AnalysisLog + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("run_effect"),
            analyzer,
            analysis_log,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::LoadImage { path } => {
                let max_side = self.config.preview_max_side;
                let loaded = panic::catch_unwind(AssertUnwindSafe(|| load_preview(&path, max_side)))
                    .unwrap_or_else(|panic| {
                        Err(DetectorError::ImageDecode(format!(
                            "{}: {}",
                            path.display(),
                            panic_message(panic.as_ref())
                        )))
                    })
                    .map(|preview| LoadedImage {
                        path,
                        preview: Arc::new(preview),
                    });
                if let Err(err) = &loaded {
                    let _ = self.logger.error(&err.to_string());
                }
                let _ = self.event_sender.send(Event::ImageLoadDone(loaded));
            }
            Effect::AnalyzeImage { path } => {
                let analyzer = &self.analyzer;
                let result = panic::catch_unwind(AssertUnwindSafe(|| analyzer.analyze(&path)))
                    .unwrap_or_else(|panic| {
                        Err(DetectorError::Inference(panic_message(panic.as_ref())))
                    });
                if let Err(err) = &result {
                    let _ = self.logger.error(&err.to_string());
                }
                let _ = self.event_sender.send(Event::AnalyzeDone(result));
            }
            Effect::AppendLog { entry } => {
                if let Err(e) = self.analysis_log.append(&entry) {
                    let err = DetectorError::Logging(e.to_string());
                    let _ = self.logger.error(&err.to_string());
                }
            }
        }
    }
}

/// Worker panics become ordinary failures so the session always gets its completion event.
fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unexpected internal failure".to_string())
}
