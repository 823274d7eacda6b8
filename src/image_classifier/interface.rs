use crate::preprocessor::ImageTensor;

pub trait ImageClassifier: Send + Sync {
    /// Probability of the positive (tumor) class for a single image.
    fn predict(&self, tensor: &ImageTensor) -> Result<f32, Box<dyn std::error::Error + Send + Sync>>;
}
