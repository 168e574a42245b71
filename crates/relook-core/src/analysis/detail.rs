//! Sharpness analyzer based on Sobel gradient magnitude.

use rayon::prelude::*;

use crate::analysis::{Analyzer, Estimate};
use crate::color::ColorViews;
use crate::config::EngineTuning;
use crate::parallel::PARALLEL_THRESHOLD;
use crate::params::Parameter;

/// Gradient mean below this counts as a featureless frame.
const FLAT_GRADIENT: f32 = 0.1;

/// Mean Sobel gradient magnitude over the interior pixels of a luma plane.
///
/// Border pixels are skipped rather than padded; a one-pixel margin has no
/// visible effect on the statistic and keeps the kernel unconditional.
pub(crate) fn mean_gradient_magnitude(luma: &[f32], width: u32, height: u32) -> f32 {
    let w = width as usize;
    let h = height as usize;
    if w < 3 || h < 3 {
        return 0.0;
    }

    let row_sum = |y: usize| -> f64 {
        let mut sum = 0.0f64;
        for x in 1..w - 1 {
            let i = y * w + x;
            let gx = (luma[i - w + 1] + 2.0 * luma[i + 1] + luma[i + w + 1])
                - (luma[i - w - 1] + 2.0 * luma[i - 1] + luma[i + w - 1]);
            let gy = (luma[i + w - 1] + 2.0 * luma[i + w] + luma[i + w + 1])
                - (luma[i - w - 1] + 2.0 * luma[i - w] + luma[i - w + 1]);
            sum += ((gx * gx + gy * gy) as f64).sqrt();
        }
        sum
    };

    let total: f64 = if w * h >= PARALLEL_THRESHOLD {
        (1..h - 1).into_par_iter().map(row_sum).sum()
    } else {
        (1..h - 1).map(row_sum).sum()
    };

    let interior = ((w - 2) * (h - 2)) as f64;
    (total / interior) as f32
}

pub(crate) struct Sharpness;

impl Analyzer for Sharpness {
    fn parameter(&self) -> Parameter {
        Parameter::Sharpness
    }

    fn estimate(&self, views: &ColorViews, tuning: &EngineTuning) -> Estimate {
        let gradient = mean_gradient_magnitude(&views.luma, views.width, views.height);

        // Featureless frame: nothing to judge sharpness against.
        if gradient < FLAT_GRADIENT {
            return Estimate {
                deviation: 0.0,
                confidence: 0.5,
                direction: None,
            };
        }

        let deviation =
            (gradient - tuning.sharpness_reference) / tuning.sharpness_reference * 100.0;

        // Very low-texture images make the gradient statistic noisy; scale
        // confidence with how much texture there is to measure.
        let confidence = (gradient / tuning.sharpness_reference).clamp(0.5, 0.9);

        Estimate {
            deviation,
            confidence,
            direction: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_plane_has_zero_gradient() {
        let luma = vec![100.0f32; 10 * 10];
        assert!(mean_gradient_magnitude(&luma, 10, 10) < 1e-6);
    }

    #[test]
    fn test_vertical_edge_has_gradient() {
        let width = 10u32;
        let height = 10u32;
        let mut luma = vec![0.0f32; 100];
        for y in 0..height as usize {
            for x in 5..width as usize {
                luma[y * width as usize + x] = 255.0;
            }
        }
        assert!(mean_gradient_magnitude(&luma, width, height) > 10.0);
    }

    #[test]
    fn test_tiny_plane_returns_zero() {
        let luma = vec![50.0f32; 4];
        assert_eq!(mean_gradient_magnitude(&luma, 2, 2), 0.0);
    }
}
