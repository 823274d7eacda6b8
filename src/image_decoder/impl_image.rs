use crate::image_decoder::interface::{ImageDecoder, PixelGrid};
use image::{DynamicImage, Luma};

/// Decodes any raster format the `image` crate recognizes from its magic bytes.
pub struct ImageDecoderImage {}

impl ImageDecoderImage {
    pub fn new() -> Self {
        Self {}
    }
}

impl ImageDecoder for ImageDecoderImage {
    fn decode(&self, bytes: &[u8]) -> Result<PixelGrid, Box<dyn std::error::Error + Send + Sync>> {
        let image = image::load_from_memory(bytes)?;

        if image.width() == 0 || image.height() == 0 {
            return Err("image has no pixels".into());
        }

        Ok(to_gray(image))
    }
}

/// Rec.601 luma in 14-bit fixed point (0.299, 0.587, 0.114), rounded.
fn to_gray(image: DynamicImage) -> PixelGrid {
    if let DynamicImage::ImageLuma8(gray) = image {
        return gray;
    }

    let rgb = image.to_rgb8();
    PixelGrid::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let luma = (r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + (1 << 13)) >> 14;
        Luma([luma as u8])
    })
}
