use crate::analysis_log::interface::LogEntry;
use crate::error::DetectorError;
use crate::preview::Preview;
use crate::result_policy::{format_report, AnalysisResult};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub preview: Arc<Preview>,
}

impl LoadedImage {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub result: AnalysisResult,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.to_string(),
        }
    }

    fn warning(message: &str) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.to_string(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        path: PathBuf,
    },
    Analyzing,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    pub phase: Phase,
    pub image: Option<LoadedImage>,
    pub report: Option<Report>,
    pub notice: Option<Notice>,
}

impl State {
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn can_analyze(&self) -> bool {
        !self.is_busy() && self.image.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ImageSelected(PathBuf),
    ImageLoadDone(Result<LoadedImage, DetectorError>),
    AnalyzeRequested,
    AnalyzeDone(Result<AnalysisResult, DetectorError>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ImageLoadDone(Ok(image)) => {
                format!("ImageLoadDone(Ok({}))", image.path.display())
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadImage { path: PathBuf },
    AnalyzeImage { path: PathBuf },
    AppendLog { entry: LogEntry },
}

pub const NOTICE_IMAGE_LOADED: &str = "Image loaded. Press Analyze to look for a tumor.";
pub const NOTICE_NO_IMAGE: &str = "Please load an image first.";

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.phase.clone(), event) {
        (Phase::Idle, Event::ImageSelected(path)) => (
            State {
                phase: Phase::Loading { path: path.clone() },
                ..state
            },
            vec![Effect::LoadImage { path }],
        ),

        (Phase::Loading { .. }, Event::ImageLoadDone(Ok(image))) => (
            State {
                phase: Phase::Idle,
                image: Some(image),
                report: None,
                notice: Some(Notice::info(NOTICE_IMAGE_LOADED)),
            },
            vec![],
        ),
        (Phase::Loading { .. }, Event::ImageLoadDone(Err(err))) => (
            State {
                phase: Phase::Idle,
                notice: Some(Notice::error(err.to_string())),
                ..state
            },
            vec![],
        ),

        (Phase::Idle, Event::AnalyzeRequested) => {
            let loaded_path = state.image.as_ref().map(|image| image.path.clone());
            match loaded_path {
                Some(path) => (
                    State {
                        phase: Phase::Analyzing,
                        notice: None,
                        ..state
                    },
                    vec![Effect::AnalyzeImage { path }],
                ),
                None => (
                    State {
                        notice: Some(Notice::warning(NOTICE_NO_IMAGE)),
                        ..state
                    },
                    vec![],
                ),
            }
        }

        (Phase::Analyzing, Event::AnalyzeDone(Ok(result))) => {
            let effects = match &state.image {
                Some(image) => vec![Effect::AppendLog {
                    entry: LogEntry::new(&result, &image.file_name()),
                }],
                None => vec![],
            };
            let report = Report {
                text: format_report(&result),
                result,
            };
            (
                State {
                    phase: Phase::Idle,
                    report: Some(report),
                    notice: None,
                    ..state
                },
                effects,
            )
        }
        (Phase::Analyzing, Event::AnalyzeDone(Err(err))) => (
            State {
                phase: Phase::Idle,
                notice: Some(Notice::error(err.to_string())),
                ..state
            },
            vec![],
        ),

        // One request at a time; anything else is stale or arrives while busy.
        (_, _) => (state, vec![]),
    }
}
