use crate::error::DetectorError;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::model_config::ModelConfig;
use crate::preprocessor::ImageTensor;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input_shape: [usize; 4],
}

impl ImageClassifierTractOnnx {
    pub fn new(config: &ModelConfig) -> Result<Self, DetectorError> {
        let path = &config.onnx_model_path;

        if !path.is_file() {
            return Err(DetectorError::Startup(format!(
                "model file '{}' was not found. Place the exported ONNX model next to the application.",
                path.display()
            )));
        }

        let (height, width) = config.input_shape;

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    f32::fact([1, height as usize, width as usize, 1]).into(),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| {
                DetectorError::Startup(format!(
                    "unable to load model '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(Self {
            model,
            input_shape: [1, height as usize, width as usize, 1],
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(&self, tensor: &ImageTensor) -> Result<f32, Box<dyn std::error::Error + Send + Sync>> {
        if tensor.shape() != self.input_shape {
            return Err(format!(
                "expected input shape {:?}, got {:?}",
                self.input_shape,
                tensor.shape()
            )
            .into());
        }

        let input = tensor.as_array().clone().into_tensor();

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;

        let output = outputs
            .first()
            .ok_or("model produced no outputs")?
            .to_array_view::<f32>()?;

        let score = output
            .iter()
            .next()
            .copied()
            .ok_or("model produced an empty output")?;

        Ok(score)
    }
}
