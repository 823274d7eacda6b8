use crate::image_classifier::interface::ImageClassifier;
use crate::preprocessor::ImageTensor;
use std::sync::atomic::{AtomicUsize, Ordering};

pub enum FakeScore {
    Fixed(f32),
    /// Mean of the tensor values, so different images give different scores.
    MeanIntensity,
    Failing(String),
    Panicking(String),
}

pub struct ImageClassifierFake {
    score: FakeScore,
    calls: AtomicUsize,
}

impl ImageClassifierFake {
    pub fn new(score: FakeScore) -> Self {
        Self {
            score,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(&self, tensor: &ImageTensor) -> Result<f32, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.score {
            FakeScore::Fixed(score) => Ok(*score),
            FakeScore::MeanIntensity => tensor
                .as_array()
                .mean()
                .ok_or_else(|| "ImageClassifierFake: empty tensor".into()),
            FakeScore::Failing(message) => Err(message.clone().into()),
            FakeScore::Panicking(message) => panic!("{}", message),
        }
    }
}
