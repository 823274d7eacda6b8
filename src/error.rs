use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectorError {
    #[error("Startup failed: {0}")]
    Startup(String),

    #[error("Unable to load image: {0}")]
    ImageDecode(String),

    #[error("Analysis failed: {0}")]
    Inference(String),

    #[error("Unable to write analysis log: {0}")]
    Logging(String),
}
