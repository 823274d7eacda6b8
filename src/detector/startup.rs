use crate::analysis_log::impl_file::AnalysisLogFile;
use crate::analyzer::Analyzer;
use crate::config::Config;
use crate::detector::main::Detector;
use crate::error::DetectorError;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_decoder::impl_image::ImageDecoderImage;
use crate::library::logger::interface::Logger;
use crate::preprocessor::Preprocessor;
use crate::result_policy::ResultPolicy;
use std::sync::Arc;

/// Loads the model and wires the session. Any error here is fatal.
pub fn build(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Detector, DetectorError> {
    let startup_logger = logger.with_namespace("startup");

    let _ = startup_logger.info(&format!(
        "Loading model from {}",
        config.model.onnx_model_path.display()
    ));

    let image_classifier = Arc::new(ImageClassifierTractOnnx::new(&config.model)?);

    let _ = startup_logger.info("Model loaded");

    let preprocessor = Preprocessor::new(
        Arc::new(ImageDecoderImage::new()),
        config.model.input_shape,
        config.resize_filter,
    );

    let analyzer = Arc::new(Analyzer::new(
        preprocessor,
        image_classifier,
        ResultPolicy::new(config.decision_threshold),
        logger.clone(),
    ));

    let analysis_log = Arc::new(AnalysisLogFile::new(config.analysis_log_path.clone()));

    Ok(Detector::new(config, logger, analyzer, analysis_log))
}

pub fn show_startup_error(err: &DetectorError) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Brain Tumor Detector")
        .set_description(err.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
