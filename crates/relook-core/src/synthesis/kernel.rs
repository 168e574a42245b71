//! Spatial sharpness adjustment via unsharp masking.

use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::parallel::PARALLEL_THRESHOLD;

const CHANNELS: usize = PixelBuffer::CHANNELS;

/// Box blur with clamp-to-edge sampling.
fn box_blur(working: &[f32], width: u32, height: u32, radius: i32) -> Vec<f32> {
    let w = width as i32;
    let h = height as i32;
    let window = (2 * radius + 1) * (2 * radius + 1);

    let blur_row = |y: i32| -> Vec<f32> {
        let mut row = vec![0.0f32; width as usize * CHANNELS];
        for x in 0..w {
            let mut acc = [0.0f32; CHANNELS];
            for dy in -radius..=radius {
                let sy = (y + dy).clamp(0, h - 1);
                for dx in -radius..=radius {
                    let sx = (x + dx).clamp(0, w - 1);
                    let i = (sy * w + sx) as usize * CHANNELS;
                    acc[0] += working[i];
                    acc[1] += working[i + 1];
                    acc[2] += working[i + 2];
                }
            }
            let o = x as usize * CHANNELS;
            row[o] = acc[0] / window as f32;
            row[o + 1] = acc[1] / window as f32;
            row[o + 2] = acc[2] / window as f32;
        }
        row
    };

    let rows: Vec<Vec<f32>> = if (width as usize) * (height as usize) >= PARALLEL_THRESHOLD {
        (0..h).into_par_iter().map(blur_row).collect()
    } else {
        (0..h).map(blur_row).collect()
    };

    rows.concat()
}

/// Sharpen (positive amount) or soften (negative amount) the working buffer.
///
/// Positive amounts add back a fraction of the detail layer (unsharp mask);
/// negative amounts blend toward the blurred base. Larger magnitudes widen
/// the blur radius slightly.
pub(crate) fn apply_sharpness(working: &mut [f32], width: u32, height: u32, amount: f32) {
    if width < 3 || height < 3 {
        return;
    }

    let radius = ((amount.abs() / 50.0).ceil() as i32).clamp(1, 2);
    let blurred = box_blur(working, width, height, radius);

    if amount > 0.0 {
        let strength = amount / 100.0;
        for (value, base) in working.iter_mut().zip(blurred.iter()) {
            *value = (*value + strength * (*value - base)).clamp(0.0, 1.0);
        }
    } else {
        let blend = (amount.abs() / 100.0).min(1.0);
        for (value, base) in working.iter_mut().zip(blurred.iter()) {
            *value = (*value + blend * (base - *value)).clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_buffer(width: u32, height: u32) -> Vec<f32> {
        let mut data = vec![0.0f32; width as usize * height as usize * CHANNELS];
        for y in 0..height as usize {
            for x in width as usize / 2..width as usize {
                let i = (y * width as usize + x) * CHANNELS;
                data[i] = 1.0;
                data[i + 1] = 1.0;
                data[i + 2] = 1.0;
            }
        }
        data
    }

    fn edge_contrast(data: &[f32], width: u32) -> f32 {
        let w = width as usize;
        let left = (w / 2 - 1) * CHANNELS;
        let right = (w / 2) * CHANNELS;
        data[right] - data[left]
    }

    #[test]
    fn test_blur_softens_edge() {
        let data = edge_buffer(16, 16);
        let blurred = box_blur(&data, 16, 16, 1);

        // Pixels adjacent to the edge pick up mass from the other side.
        let w = 16usize;
        let near_edge = (8 * w + w / 2 - 1) * CHANNELS;
        assert!(blurred[near_edge] > 0.0);
        assert!(blurred[near_edge] < 1.0);
    }

    #[test]
    fn test_positive_amount_keeps_edge_crisp() {
        let mut sharpened = edge_buffer(16, 16);
        apply_sharpness(&mut sharpened, 16, 16, 60.0);

        let mut softened = edge_buffer(16, 16);
        apply_sharpness(&mut softened, 16, 16, -60.0);

        assert!(edge_contrast(&sharpened, 16) > edge_contrast(&softened, 16));
    }

    #[test]
    fn test_tiny_buffer_untouched() {
        let mut data = vec![0.5f32; 2 * 2 * CHANNELS];
        let before = data.clone();
        apply_sharpness(&mut data, 2, 2, 50.0);
        assert_eq!(data, before);
    }
}
