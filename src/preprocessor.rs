use crate::error::DetectorError;
use crate::image_decoder::interface::{ImageDecoder, PixelGrid};
use image::imageops::{self, FilterType};
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::tract_ndarray::Array4;

/// Normalized grayscale input in NHWC layout: (1, height, width, 1), values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor(Array4<f32>);

impl ImageTensor {
    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    pub fn as_array(&self) -> &Array4<f32> {
        &self.0
    }
}

pub struct Preprocessor {
    decoder: Arc<dyn ImageDecoder + Send + Sync>,
    width: u32,
    height: u32,
    filter: FilterType,
}

impl Preprocessor {
    pub fn new(
        decoder: Arc<dyn ImageDecoder + Send + Sync>,
        input_shape: (u32, u32),
        filter: FilterType,
    ) -> Self {
        Self {
            decoder,
            height: input_shape.0,
            width: input_shape.1,
            filter,
        }
    }

    pub fn preprocess(&self, path: &Path) -> Result<ImageTensor, DetectorError> {
        let bytes = std::fs::read(path).map_err(|e| {
            DetectorError::ImageDecode(format!("{}: {}", path.display(), e))
        })?;

        let grid = self.decoder.decode(&bytes).map_err(|e| {
            DetectorError::ImageDecode(format!("{}: {}", path.display(), e))
        })?;

        Ok(self.grid_to_tensor(&grid))
    }

    pub fn grid_to_tensor(&self, grid: &PixelGrid) -> ImageTensor {
        let resized = imageops::resize(grid, self.width, self.height, self.filter);

        let tensor = Array4::from_shape_fn(
            (1, self.height as usize, self.width as usize, 1),
            |(_, y, x, _)| resized.get_pixel(x as u32, y as u32)[0] as f32 / 255.0,
        );

        ImageTensor(tensor)
    }
}
