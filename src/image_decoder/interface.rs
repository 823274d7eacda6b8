/// Single-channel 8-bit pixels, any non-zero size.
pub type PixelGrid = image::GrayImage;

pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<PixelGrid, Box<dyn std::error::Error + Send + Sync>>;
}
