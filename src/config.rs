use crate::image_classifier::model_config::ModelConfig;
use image::imageops::FilterType;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub analysis_log_path: PathBuf,
    pub decision_threshold: f32,
    pub resize_filter: FilterType,
    pub preview_max_side: u32,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                onnx_model_path: PathBuf::from("brain_tumor_model.onnx"),
                input_shape: (224, 224),
            },
            analysis_log_path: PathBuf::from("analysis_log.txt"),
            decision_threshold: 0.5,
            resize_filter: FilterType::Lanczos3,
            preview_max_side: 400,
            logger_timezone: local_timezone(),
        }
    }
}

fn local_timezone() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
