//! Frame serialization for the device upload path.

use std::path::Path;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use thiserror::Error;

use crate::framebuffer::Canvas;

/// JPEG quality used when the caller has no preference.
pub const DEFAULT_JPEG_QUALITY: u8 = 50;

/// Frame encoding failure.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The image codec rejected the frame.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the encoded frame failed.
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// Encodes the canvas as PNG bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        &canvas.to_rgb_bytes(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    tracing::trace!(bytes = buf.len(), "encoded png frame");
    Ok(buf)
}

/// Encodes the canvas as baseline JPEG; `quality` is clamped to `1..=100`.
pub fn encode_jpeg(canvas: &Canvas, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let quality = quality.clamp(1, 100);
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality).write_image(
        &canvas.to_rgb_bytes(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    tracing::trace!(bytes = buf.len(), quality, "encoded jpeg frame");
    Ok(buf)
}

/// Copies the canvas into an `image` buffer.
pub fn to_image(canvas: &Canvas) -> RgbImage {
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let p = canvas.pixel(x, y).unwrap_or(Rgb888::BLACK);
        image::Rgb([p.r(), p.g(), p.b()])
    })
}

/// Writes the canvas to `path` as PNG.
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    std::fs::write(path, encode_png(canvas)?)?;
    Ok(())
}
