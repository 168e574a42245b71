//! Luma-driven analyzers: brightness, contrast, shadow, highlight.

use crate::analysis::stats::{histogram_peak, luma_histogram, mean, mean_abs_dev, std_dev};
use crate::analysis::{Analyzer, Estimate};
use crate::color::ColorViews;
use crate::config::EngineTuning;
use crate::params::Parameter;

/// A spread below this is treated as a flat distribution.
const FLAT_STD_DEV: f32 = 1.0;

/// Expected MAD-to-std ratio for a normal distribution.
const NORMAL_MAD_RATIO: f32 = 1.2533;

pub(crate) struct Brightness;

impl Analyzer for Brightness {
    fn parameter(&self) -> Parameter {
        Parameter::Brightness
    }

    fn estimate(&self, views: &ColorViews, tuning: &EngineTuning) -> Estimate {
        let mean_luma = mean(&views.luma);
        let deviation = (mean_luma - tuning.brightness_reference) / tuning.brightness_reference
            * 100.0;

        // Agreement between the mean and the histogram peak: a mean pulled
        // far from the dominant tone means a skewed distribution and a less
        // trustworthy single-number brightness.
        let histogram = luma_histogram(&views.luma);
        let peak = histogram_peak(&histogram) as f32;
        let disagreement = (mean_luma - peak).abs() / 255.0;
        let confidence = (1.0 - disagreement).clamp(0.5, 1.0);

        Estimate {
            deviation,
            confidence,
            direction: None,
        }
    }
}

pub(crate) struct Contrast;

impl Analyzer for Contrast {
    fn parameter(&self) -> Parameter {
        Parameter::Contrast
    }

    fn estimate(&self, views: &ColorViews, tuning: &EngineTuning) -> Estimate {
        let mean_luma = mean(&views.luma);
        let spread = std_dev(&views.luma, mean_luma);

        // Flat image: no contrast signal to measure.
        if spread < FLAT_STD_DEV {
            return Estimate {
                deviation: 0.0,
                confidence: 0.5,
                direction: None,
            };
        }

        let deviation = (spread - tuning.contrast_reference) / tuning.contrast_reference * 100.0;

        // Cross-check the std against the scaled mean absolute deviation;
        // heavy-tailed distributions inflate the std relative to the MAD.
        let mad = mean_abs_dev(&views.luma, mean_luma);
        let robust_spread = mad * NORMAL_MAD_RATIO;
        let agreement = if spread > 0.0 {
            1.0 - ((spread - robust_spread).abs() / spread)
        } else {
            0.0
        };
        let confidence = agreement.clamp(0.6, 1.0);

        Estimate {
            deviation,
            confidence,
            direction: None,
        }
    }
}

/// Mean luma of the masked region, its population ratio, and the deviation
/// damping weight for sparsely populated regions.
fn region_estimate(
    luma: &[f32],
    in_region: impl Fn(f32) -> bool,
    fallback: f32,
    reference: f32,
) -> Estimate {
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for &value in luma {
        if in_region(value) {
            sum += value as f64;
            count += 1;
        }
    }

    let ratio = count as f32 / luma.len() as f32;
    let region_mean = if count > 0 {
        (sum / count as f64) as f32
    } else {
        fallback
    };

    // A region holding almost no pixels says little about the look; damp
    // the deviation toward zero as the population shrinks. Full weight is
    // reached at 5% population.
    let weight = (ratio * 20.0).min(1.0);
    let deviation = (region_mean - reference) / reference * 100.0 * weight;
    let confidence = (ratio * 5.0 + 0.3).min(1.0);

    Estimate {
        deviation,
        confidence,
        direction: None,
    }
}

pub(crate) struct Shadow;

impl Analyzer for Shadow {
    fn parameter(&self) -> Parameter {
        Parameter::Shadow
    }

    fn estimate(&self, views: &ColorViews, tuning: &EngineTuning) -> Estimate {
        let threshold = tuning.shadow_threshold;
        region_estimate(
            &views.luma,
            |v| v < threshold,
            threshold,
            tuning.shadow_reference,
        )
    }
}

pub(crate) struct Highlight;

impl Analyzer for Highlight {
    fn parameter(&self) -> Parameter {
        Parameter::Highlight
    }

    fn estimate(&self, views: &ColorViews, tuning: &EngineTuning) -> Estimate {
        let threshold = tuning.highlight_threshold;
        region_estimate(
            &views.luma,
            |v| v > threshold,
            threshold,
            tuning.highlight_reference,
        )
    }
}
