use crate::error::DetectorError;
use image::imageops::FilterType;
use image::ImageReader;
use std::path::Path;

/// RGBA pixels scaled to fit the image panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

pub fn load_preview(path: &Path, max_side: u32) -> Result<Preview, DetectorError> {
    let decode_error = |e: &dyn std::fmt::Display| {
        DetectorError::ImageDecode(format!("{}: {}", path.display(), e))
    };

    let decoded = ImageReader::open(path)
        .map_err(|e| decode_error(&e))?
        .with_guessed_format()
        .map_err(|e| decode_error(&e))?
        .decode()
        .map_err(|e| decode_error(&e))?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(decode_error(&"image has no pixels"));
    }

    let thumb = if decoded.width() > max_side || decoded.height() > max_side {
        decoded.resize(max_side, max_side, FilterType::Lanczos3)
    } else {
        decoded
    };

    Ok(Preview {
        size: [thumb.width() as usize, thumb.height() as usize],
        rgba: thumb.to_rgba8().into_raw(),
    })
}
