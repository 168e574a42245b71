//! Per-pixel transforms operating on the 0.0-1.0 working buffer.

use crate::buffer::PixelBuffer;
use crate::color::{hsv_to_rgb, luma, rgb_to_hsv};
use crate::config::EngineTuning;
use crate::parallel::parallel_for_each_chunk_mut;

const CHANNELS: usize = PixelBuffer::CHANNELS;

fn clamp_pixel(px: &mut [f32]) {
    px[0] = px[0].clamp(0.0, 1.0);
    px[1] = px[1].clamp(0.0, 1.0);
    px[2] = px[2].clamp(0.0, 1.0);
}

/// Scale all channels by a brightness factor.
pub(crate) fn apply_brightness(working: &mut [f32], amount: f32) {
    let factor = (1.0 + amount / 100.0).clamp(0.1, 2.0);

    parallel_for_each_chunk_mut(working, CHANNELS, |px| {
        px[0] *= factor;
        px[1] *= factor;
        px[2] *= factor;
        clamp_pixel(px);
    });
}

/// Stretch or compress channels around mid-gray.
pub(crate) fn apply_contrast(working: &mut [f32], amount: f32) {
    let factor = (1.0 + amount / 100.0).clamp(0.1, 2.0);

    parallel_for_each_chunk_mut(working, CHANNELS, |px| {
        px[0] = (px[0] - 0.5) * factor + 0.5;
        px[1] = (px[1] - 0.5) * factor + 0.5;
        px[2] = (px[2] - 0.5) * factor + 0.5;
        clamp_pixel(px);
    });
}

/// Scale HSV saturation. A factor of 0.0 produces grayscale.
pub(crate) fn apply_saturation(working: &mut [f32], amount: f32) {
    let factor = (1.0 + amount / 100.0).clamp(0.0, 2.0);

    parallel_for_each_chunk_mut(working, CHANNELS, |px| {
        let mut hsv = rgb_to_hsv(px[0], px[1], px[2]);
        hsv.s = (hsv.s * factor).clamp(0.0, 1.0);
        let (r, g, b) = hsv_to_rgb(hsv);
        px[0] = r;
        px[1] = g;
        px[2] = b;
        clamp_pixel(px);
    });
}

/// Shift the red/blue channel balance by a Kelvin amount.
///
/// The two channels move by symmetric opposite factors, at most +-30% of
/// their value at the full +-500K range.
pub(crate) fn apply_temperature(working: &mut [f32], amount: f32) {
    let shift = 0.3 * (amount / 500.0);
    let r_factor = 1.0 + shift;
    let b_factor = 1.0 - shift;

    parallel_for_each_chunk_mut(working, CHANNELS, |px| {
        px[0] *= r_factor;
        px[2] *= b_factor;
        clamp_pixel(px);
    });
}

/// Rotate hue by a signed number of degrees.
pub(crate) fn apply_hue(working: &mut [f32], degrees: f32) {
    parallel_for_each_chunk_mut(working, CHANNELS, |px| {
        let mut hsv = rgb_to_hsv(px[0], px[1], px[2]);
        hsv.h = (hsv.h + degrees).rem_euclid(360.0);
        let (r, g, b) = hsv_to_rgb(hsv);
        px[0] = r;
        px[1] = g;
        px[2] = b;
        clamp_pixel(px);
    });
}

/// Lift or lower the shadow and highlight regions independently.
///
/// Membership comes from the pixel's luma before this step, with the two
/// regions separated by disjoint cutoffs; mid-tones pass through untouched.
/// Every pixel in a region is scaled by the flat factor `1 + amount/100`.
pub(crate) fn apply_shadow_highlight(
    working: &mut [f32],
    shadow_amount: f32,
    highlight_amount: f32,
    tuning: &EngineTuning,
) {
    let shadow_cutoff = tuning.synthesis_shadow_cutoff;
    let highlight_cutoff = tuning.synthesis_highlight_cutoff;

    let shadow_factor = (1.0 + shadow_amount / 100.0).clamp(0.0, 2.0);
    let highlight_factor = (1.0 + highlight_amount / 100.0).clamp(0.0, 2.0);

    parallel_for_each_chunk_mut(working, CHANNELS, |px| {
        let y = luma(px[0], px[1], px[2]);

        let factor = if y < shadow_cutoff {
            shadow_factor
        } else if y > highlight_cutoff {
            highlight_factor
        } else {
            return;
        };

        px[0] *= factor;
        px[1] *= factor;
        px[2] *= factor;
        clamp_pixel(px);
    });
}
