use crate::error::Result;
use image::ImageFormat;
use image::imageops::FilterType;
use std::path::Path;

pub const COVER_WIDTH: u32 = 426;
pub const COVER_HEIGHT: u32 = 240;

/// Resize the image at `path` to exactly `width`x`height` with Lanczos
/// resampling and save it back over the original as PNG.
///
/// The format is sniffed from the file contents, so a renderer that emits
/// JPEG bytes under a `.png` name still loads.
pub fn resize_in_place(path: &Path, width: u32, height: u32) -> Result<()> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    log::debug!(
        "resizing {} from {}x{} to {width}x{height}",
        path.display(),
        img.width(),
        img.height()
    );
    img.resize_exact(width, height, FilterType::Lanczos3)
        .save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
