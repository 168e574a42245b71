//! Scalar statistics over per-pixel samples.

use crate::parallel::parallel_fold_reduce;

/// Mean of a sample slice. Empty input returns 0.0.
pub(crate) fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let sum = parallel_fold_reduce(
        values,
        1,
        || 0.0f64,
        |acc, v| acc + v[0] as f64,
        |a, b| a + b,
    );
    (sum / values.len() as f64) as f32
}

/// Population standard deviation around a precomputed mean.
pub(crate) fn std_dev(values: &[f32], mean: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let sum_sq = parallel_fold_reduce(
        values,
        1,
        || 0.0f64,
        |acc, v| {
            let d = v[0] as f64 - mean as f64;
            acc + d * d
        },
        |a, b| a + b,
    );
    ((sum_sq / values.len() as f64) as f32).sqrt()
}

/// Mean absolute deviation around a precomputed mean.
pub(crate) fn mean_abs_dev(values: &[f32], mean: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let sum = parallel_fold_reduce(
        values,
        1,
        || 0.0f64,
        |acc, v| acc + (v[0] as f64 - mean as f64).abs(),
        |a, b| a + b,
    );
    (sum / values.len() as f64) as f32
}

/// 256-bin histogram of luma values on the 0.0-255.0 scale.
pub(crate) fn luma_histogram(luma: &[f32]) -> [u32; 256] {
    let mut histogram = [0u32; 256];
    for &value in luma {
        let bin = value.clamp(0.0, 255.0) as usize;
        histogram[bin] += 1;
    }
    histogram
}

/// Bin index holding the most pixels. Ties resolve to the lower bin.
pub(crate) fn histogram_peak(histogram: &[u32; 256]) -> usize {
    let mut peak = 0usize;
    let mut best = 0u32;
    for (bin, &count) in histogram.iter().enumerate() {
        if count > best {
            best = count;
            peak = bin;
        }
    }
    peak
}
