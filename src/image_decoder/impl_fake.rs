use crate::image_decoder::interface::{ImageDecoder, PixelGrid};

/// Ignores the bytes and hands back a fixed grid, or fails when built with `failing`.
pub struct ImageDecoderFake {
    grid: Option<PixelGrid>,
}

impl ImageDecoderFake {
    pub fn new(grid: PixelGrid) -> Self {
        Self { grid: Some(grid) }
    }

    pub fn failing() -> Self {
        Self { grid: None }
    }
}

impl ImageDecoder for ImageDecoderFake {
    fn decode(&self, _bytes: &[u8]) -> Result<PixelGrid, Box<dyn std::error::Error + Send + Sync>> {
        self.grid
            .clone()
            .ok_or_else(|| "ImageDecoderFake: decode failed".into())
    }
}
