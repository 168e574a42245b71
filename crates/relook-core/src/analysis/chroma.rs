//! Color-driven analyzers: saturation, temperature, hue.

use crate::analysis::{Analyzer, Estimate};
use crate::color::ColorViews;
use crate::config::EngineTuning;
use crate::parallel::parallel_fold_reduce;
use crate::params::Parameter;

/// Mean LAB chroma below this counts as achromatic.
const ACHROMATIC_CHROMA: f32 = 1.0;

/// Minimum HSV saturation for a pixel to vote on hue.
const HUE_VOTE_SATURATION: f32 = 0.04;

pub(crate) struct Saturation;

impl Analyzer for Saturation {
    fn parameter(&self) -> Parameter {
        Parameter::Saturation
    }

    fn estimate(&self, views: &ColorViews, tuning: &EngineTuning) -> Estimate {
        let n = views.num_pixels() as f64;

        let sat_sum = parallel_fold_reduce(
            &views.hsv,
            1,
            || 0.0f64,
            |acc, px| acc + px[0].s as f64,
            |a, b| a + b,
        );
        let chroma_sum = parallel_fold_reduce(
            &views.lab,
            1,
            || 0.0f64,
            |acc, px| acc + px[0].chroma() as f64,
            |a, b| a + b,
        );

        let mean_saturation = (sat_sum / n) as f32 * 255.0;
        let mean_chroma = (chroma_sum / n) as f32;

        // An image with no color content has no saturation look to deviate
        // from; reporting it as maximally muted would be misleading.
        if mean_chroma < ACHROMATIC_CHROMA && mean_saturation < ACHROMATIC_CHROMA {
            return Estimate {
                deviation: 0.0,
                confidence: 0.5,
                direction: None,
            };
        }

        let deviation = (mean_saturation - tuning.saturation_reference)
            / tuning.saturation_reference
            * 100.0;

        // HSV saturation and LAB chroma should agree on how colorful the
        // image is; disagreement points at saturated-but-dark content where
        // HSV over-reports.
        let chroma_scaled = mean_chroma * 2.0;
        let disagreement = (mean_saturation - chroma_scaled).abs() / 255.0;
        let confidence = (1.0 - disagreement).clamp(0.5, 1.0);

        Estimate {
            deviation,
            confidence,
            direction: None,
        }
    }
}

pub(crate) struct Temperature;

impl Analyzer for Temperature {
    fn parameter(&self) -> Parameter {
        Parameter::Temperature
    }

    fn estimate(&self, views: &ColorViews, tuning: &EngineTuning) -> Estimate {
        let [r, g, b] = views.channel_means;

        // Near-black frame carries no channel balance signal.
        if r + b < 1.0 {
            return Estimate {
                deviation: 0.0,
                confidence: 0.5,
                direction: None,
            };
        }

        let imbalance = (r - b) / (r + b);
        let deviation = imbalance * tuning.temperature_scale;

        // Gray-world check: in a neutral scene the green mean sits near the
        // red/blue midpoint, so a large gap suggests a strong color cast or
        // dominant subject color rather than a lighting temperature shift.
        let midpoint = (r + b) / 2.0;
        let gray_world_gap = (g - midpoint).abs() / 255.0;
        let confidence = (1.0 - gray_world_gap).clamp(0.5, 1.0);

        Estimate {
            deviation,
            confidence,
            direction: None,
        }
    }
}

pub(crate) struct Hue;

impl Hue {
    /// Dominant sector center and label for a mean hue angle.
    fn sector(hue: f32) -> (f32, &'static str) {
        if !(60.0..=300.0).contains(&hue) {
            (0.0, "red leaning")
        } else if hue < 180.0 {
            (120.0, "green leaning")
        } else {
            (240.0, "blue leaning")
        }
    }
}

impl Analyzer for Hue {
    fn parameter(&self) -> Parameter {
        Parameter::Hue
    }

    fn estimate(&self, views: &ColorViews, tuning: &EngineTuning) -> Estimate {
        let _ = tuning;

        // Circular mean over pixels carrying enough saturation to have a
        // meaningful hue.
        let (x, y, count) = parallel_fold_reduce(
            &views.hsv,
            1,
            || (0.0f64, 0.0f64, 0usize),
            |acc, px| {
                let hsv = px[0];
                if hsv.s >= HUE_VOTE_SATURATION {
                    let radians = (hsv.h as f64).to_radians();
                    (acc.0 + radians.cos(), acc.1 + radians.sin(), acc.2 + 1)
                } else {
                    acc
                }
            },
            |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2),
        );

        if count == 0 {
            return Estimate {
                deviation: 0.0,
                confidence: 0.3,
                direction: Some("neutral"),
            };
        }

        let mean_hue = (y.atan2(x).to_degrees() as f32).rem_euclid(360.0);
        let (center, label) = Self::sector(mean_hue);

        // Signed offset from the sector center, wrapped to -180..180.
        let mut offset = mean_hue - center;
        if offset > 180.0 {
            offset -= 360.0;
        } else if offset < -180.0 {
            offset += 360.0;
        }

        // Resultant length: 1.0 when every voting pixel shares one hue,
        // approaching 0.0 for uniformly scattered hues.
        let resultant = ((x * x + y * y).sqrt() / count as f64) as f32;
        let confidence = resultant.clamp(0.3, 0.95);

        // A hue sitting exactly on its sector center carries no shift.
        let direction = if offset == 0.0 { None } else { Some(label) };

        Estimate {
            deviation: offset,
            confidence,
            direction,
        }
    }
}
