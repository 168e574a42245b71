//! Owned RGB pixel buffers shared by analysis and synthesis.

use crate::error::EngineError;

/// Interleaved channel order of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
}

/// Owned 8-bit, 3-channel pixel grid.
///
/// Buffers are immutable by convention: analyzers and transforms take them
/// by reference and return new buffers, so callers never observe in-place
/// mutation. Construction enforces that the buffer holds at least one pixel
/// and that the data length matches the declared dimensions.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Samples per pixel.
    pub const CHANNELS: usize = 3;

    /// Wrap interleaved RGB bytes.
    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::ImageUnreadable(
                "empty pixel buffer".to_string(),
            ));
        }

        let expected = width as usize * height as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(EngineError::ImageUnreadable(format!(
                "pixel data length {} does not match {}x{}x3",
                data.len(),
                width,
                height
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Solid-color buffer, mostly useful in tests and benchmarks.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, EngineError> {
        let num_pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(num_pixels * Self::CHANNELS);
        for _ in 0..num_pixels {
            data.extend_from_slice(&rgb);
        }
        Self::from_rgb8(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn channel_order(&self) -> ChannelOrder {
        ChannelOrder::Rgb
    }

    /// Interleaved RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Interleaved samples as f32 in 0.0-1.0, the synthesis working domain.
    pub fn to_f32(&self) -> Vec<f32> {
        self.data.iter().map(|&v| v as f32 / 255.0).collect()
    }

    /// Rebuild an 8-bit buffer from 0.0-1.0 samples, clamping and rounding.
    pub fn from_f32(width: u32, height: u32, data: &[f32]) -> Result<Self, EngineError> {
        let bytes = data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        Self::from_rgb8(width, height, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_buffer() {
        let result = PixelBuffer::from_rgb8(0, 10, vec![]);
        assert!(matches!(result, Err(EngineError::ImageUnreadable(_))));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let result = PixelBuffer::from_rgb8(2, 2, vec![0u8; 11]);
        assert!(matches!(result, Err(EngineError::ImageUnreadable(_))));
    }

    #[test]
    fn test_f32_roundtrip_is_exact() {
        let buffer = PixelBuffer::from_rgb8(2, 1, vec![0, 51, 128, 200, 254, 255]).unwrap();
        let working = buffer.to_f32();
        let rebuilt = PixelBuffer::from_f32(2, 1, &working).unwrap();
        assert_eq!(buffer.as_bytes(), rebuilt.as_bytes());
    }
}
