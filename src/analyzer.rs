use crate::error::DetectorError;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::preprocessor::Preprocessor;
use crate::result_policy::{AnalysisResult, ResultPolicy};
use std::path::Path;
use std::sync::Arc;

/// Preprocess, predict and classify a single image file.
pub struct Analyzer {
    preprocessor: Preprocessor,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    policy: ResultPolicy,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Analyzer {
    pub fn new(
        preprocessor: Preprocessor,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        policy: ResultPolicy,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            preprocessor,
            image_classifier,
            policy,
            logger: logger.with_namespace("analyzer"),
        }
    }

    pub fn analyze(&self, path: &Path) -> Result<AnalysisResult, DetectorError> {
        let tensor = self.preprocessor.preprocess(path)?;

        let score = self
            .image_classifier
            .predict(&tensor)
            .map_err(|e| DetectorError::Inference(e.to_string()))?;

        if !(0.0..=1.0).contains(&score) {
            return Err(DetectorError::Inference(format!(
                "model returned {} which is not a probability",
                score
            )));
        }

        let result = self.policy.classify(score);

        let _ = self.logger.info(&format!(
            "{}: score {:.4}, positive {}",
            path.display(),
            result.raw_score,
            result.is_positive
        ));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_classifier::impl_fake::{FakeScore, ImageClassifierFake};
    use crate::image_decoder::impl_image::ImageDecoderImage;
    use crate::library::logger::impl_fake::LoggerFake;
    use image::imageops::FilterType;
    use image::{GrayImage, ImageBuffer, ImageFormat, Luma};
    use std::path::PathBuf;

    struct Setup {
        analyzer: Analyzer,
        classifier: Arc<ImageClassifierFake>,
        dir: tempfile::TempDir,
    }

    fn setup(score: FakeScore) -> Setup {
        let classifier = Arc::new(ImageClassifierFake::new(score));
        let analyzer = Analyzer::new(
            Preprocessor::new(
                Arc::new(ImageDecoderImage::new()),
                (224, 224),
                FilterType::Lanczos3,
            ),
            classifier.clone(),
            ResultPolicy::new(0.5),
            Arc::new(LoggerFake::new()),
        );

        Setup {
            analyzer,
            classifier,
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write_image(dir: &Path, name: &str, value: u8) -> PathBuf {
        let path = dir.join(name);
        let img: GrayImage = ImageBuffer::from_pixel(64, 48, Luma([value]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();
        path
    }

    #[test]
    fn test_fixed_score_flows_through_policy() {
        let s = setup(FakeScore::Fixed(0.73));
        let path = write_image(s.dir.path(), "scan.png", 90);

        let result = s.analyzer.analyze(&path).unwrap();

        assert!(result.is_positive);
        assert_eq!(result.confidence, 0.73);
        assert_eq!(s.classifier.calls(), 1);
    }

    #[test]
    fn test_same_file_same_score() {
        let s = setup(FakeScore::MeanIntensity);
        let path = write_image(s.dir.path(), "scan.png", 200);

        let first = s.analyzer.analyze(&path).unwrap();
        let second = s.analyzer.analyze(&path).unwrap();

        assert_eq!(first.raw_score.to_bits(), second.raw_score.to_bits());
        assert!(first.is_positive);
    }

    #[test]
    fn test_dark_image_is_negative_with_mean_intensity() {
        let s = setup(FakeScore::MeanIntensity);
        let path = write_image(s.dir.path(), "dark.png", 25);

        let result = s.analyzer.analyze(&path).unwrap();

        assert!(!result.is_positive);
        assert!(result.confidence > 0.85);
    }

    #[test]
    fn test_decode_failure_skips_inference() {
        let s = setup(FakeScore::Fixed(0.9));
        let path = s.dir.path().join("report.pdf");
        std::fs::write(&path, b"%PDF-1.7 not an image").unwrap();

        let result = s.analyzer.analyze(&path);

        assert!(matches!(result, Err(DetectorError::ImageDecode(_))));
        assert_eq!(s.classifier.calls(), 0);
    }

    #[test]
    fn test_classifier_failure_is_inference_error() {
        let s = setup(FakeScore::Failing("session poisoned".to_string()));
        let path = write_image(s.dir.path(), "scan.png", 90);

        let result = s.analyzer.analyze(&path);

        assert_eq!(
            result,
            Err(DetectorError::Inference("session poisoned".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_score_is_inference_error() {
        for score in [1.5, -0.1, f32::NAN] {
            let s = setup(FakeScore::Fixed(score));
            let path = write_image(s.dir.path(), "scan.png", 90);

            let result = s.analyzer.analyze(&path);

            assert!(matches!(result, Err(DetectorError::Inference(_))));
        }
    }
}
