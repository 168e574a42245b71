//! Shared per-pixel views computed once and read by every analyzer.

use crate::buffer::PixelBuffer;
use crate::color::{luma, rgb_to_hsv, rgb_to_lab, Hsv, Lab};
use crate::parallel::{parallel_fold_reduce, parallel_map_chunks};

/// Per-pixel statistics derived from a buffer.
///
/// Luma is kept on the 0.0-255.0 scale the reference values are defined
/// against; HSV and LAB stay in their native ranges.
pub struct ColorViews {
    pub width: u32,
    pub height: u32,
    pub luma: Vec<f32>,
    pub hsv: Vec<Hsv>,
    pub lab: Vec<Lab>,
    /// Mean R, G, B on the 0.0-255.0 scale.
    pub channel_means: [f32; 3],
}

impl ColorViews {
    /// Compute all views in one pass over the buffer.
    pub fn build(buffer: &PixelBuffer) -> Self {
        let bytes = buffer.as_bytes();
        let num_pixels = buffer.num_pixels();

        let luma = parallel_map_chunks(bytes, PixelBuffer::CHANNELS, |px| {
            luma(px[0] as f32, px[1] as f32, px[2] as f32)
        });

        let hsv = parallel_map_chunks(bytes, PixelBuffer::CHANNELS, |px| {
            rgb_to_hsv(
                px[0] as f32 / 255.0,
                px[1] as f32 / 255.0,
                px[2] as f32 / 255.0,
            )
        });

        let lab = parallel_map_chunks(bytes, PixelBuffer::CHANNELS, |px| {
            rgb_to_lab(
                px[0] as f32 / 255.0,
                px[1] as f32 / 255.0,
                px[2] as f32 / 255.0,
            )
        });

        let (r_sum, g_sum, b_sum) = parallel_fold_reduce(
            bytes,
            PixelBuffer::CHANNELS,
            || (0.0f64, 0.0f64, 0.0f64),
            |acc, px| {
                (
                    acc.0 + px[0] as f64,
                    acc.1 + px[1] as f64,
                    acc.2 + px[2] as f64,
                )
            },
            |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2),
        );

        let n = num_pixels as f64;
        let channel_means = [
            (r_sum / n) as f32,
            (g_sum / n) as f32,
            (b_sum / n) as f32,
        ];

        Self {
            width: buffer.width(),
            height: buffer.height(),
            luma,
            hsv,
            lab,
            channel_means,
        }
    }

    pub fn num_pixels(&self) -> usize {
        self.luma.len()
    }
}
