//! Image decode/encode at the engine boundary.
//!
//! Everything inside the engine works on [`PixelBuffer`]; this module is
//! the only place file formats and the `image` crate appear.

use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, RgbImage};

use crate::buffer::PixelBuffer;
use crate::error::EngineError;

/// Decode an in-memory encoded image (JPEG, PNG, or WebP) to a pixel buffer.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer, EngineError> {
    let dynamic =
        image::load_from_memory(bytes).map_err(|e| EngineError::ImageUnreadable(e.to_string()))?;
    from_dynamic(dynamic)
}

/// Decode an image file to a pixel buffer.
pub fn decode_image(path: &Path) -> Result<PixelBuffer, EngineError> {
    let dynamic = image::open(path).map_err(|e| {
        EngineError::ImageUnreadable(format!("{}: {}", path.display(), e))
    })?;
    from_dynamic(dynamic)
}

fn from_dynamic(dynamic: DynamicImage) -> Result<PixelBuffer, EngineError> {
    let rgb = dynamic.to_rgb8();
    let (width, height) = rgb.dimensions();
    PixelBuffer::from_rgb8(width, height, rgb.into_raw())
}

/// Encode a buffer as JPEG bytes at the given quality.
pub fn encode_jpeg(buffer: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EngineError> {
    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder
        .encode(
            buffer.as_bytes(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EngineError::Io(e.to_string()))?;
    Ok(out)
}

/// Write a buffer to disk, choosing the format from the file extension.
///
/// JPEG output honors the quality setting; other supported extensions go
/// through the crate's default encoder settings.
pub fn export_image(buffer: &PixelBuffer, path: &Path, jpeg_quality: u8) -> Result<(), EngineError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if extension == "jpg" || extension == "jpeg" {
        let bytes = encode_jpeg(buffer, jpeg_quality)?;
        std::fs::write(path, bytes)
            .map_err(|e| EngineError::Io(format!("{}: {}", path.display(), e)))?;
        return Ok(());
    }

    image::save_buffer(
        path,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        ExtendedColorType::Rgb8,
    )
    .map_err(|e| EngineError::Io(format!("{}: {}", path.display(), e)))
}

/// Downscale a buffer so its longest side is at most `max_dimension`.
///
/// Returns the input unchanged when it already fits. Used to build fast
/// previews before committing to a full-resolution synthesis pass.
pub fn downscale_to_fit(buffer: &PixelBuffer, max_dimension: u32) -> Result<PixelBuffer, EngineError> {
    let width = buffer.width();
    let height = buffer.height();
    let longest = width.max(height);

    if max_dimension == 0 || longest <= max_dimension {
        return Ok(buffer.clone());
    }

    let scale = max_dimension as f64 / longest as f64;
    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);

    let source = RgbImage::from_raw(width, height, buffer.as_bytes().to_vec())
        .ok_or_else(|| EngineError::ImageUnreadable("buffer dimensions mismatch".to_string()))?;
    let resized = image::imageops::resize(&source, new_width, new_height, FilterType::Lanczos3);

    PixelBuffer::from_rgb8(new_width, new_height, resized.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_roundtrip_preserves_dimensions() {
        let buffer = PixelBuffer::filled(20, 12, [180, 90, 45]).unwrap();
        let bytes = encode_jpeg(&buffer, 85).unwrap();
        let decoded = decode_bytes(&bytes).unwrap();

        assert_eq!(decoded.width(), 20);
        assert_eq!(decoded.height(), 12);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_bytes(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(EngineError::ImageUnreadable(_))));
    }

    #[test]
    fn test_downscale_caps_longest_side() {
        let buffer = PixelBuffer::filled(400, 100, [128, 128, 128]).unwrap();
        let small = downscale_to_fit(&buffer, 200).unwrap();

        assert_eq!(small.width(), 200);
        assert_eq!(small.height(), 50);
    }

    #[test]
    fn test_downscale_noop_when_within_limit() {
        let buffer = PixelBuffer::filled(64, 64, [128, 128, 128]).unwrap();
        let same = downscale_to_fit(&buffer, 128).unwrap();
        assert_eq!(same.width(), 64);
        assert_eq!(same.as_bytes(), buffer.as_bytes());
    }
}
