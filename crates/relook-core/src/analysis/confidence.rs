//! Aggregate confidence scoring.

use crate::config::EngineTuning;

/// Combine significant-parameter coverage with per-analyzer confidence.
///
/// The score grows with the fraction of parameters showing a significant
/// deviation, weighted by how confident those analyzers were, with a small
/// floor so a clean no-deviation result still reports nonzero confidence.
/// Capped at the configured maximum and rounded to two decimals.
pub(crate) fn aggregate_confidence(
    significant: usize,
    total: usize,
    local_confidences: &[f32],
    tuning: &EngineTuning,
) -> f32 {
    let fraction = significant as f32 / total as f32;

    let mean_local = if local_confidences.is_empty() {
        0.0
    } else {
        local_confidences.iter().sum::<f32>() / local_confidences.len() as f32
    };

    let raw = (fraction * mean_local + 0.1).min(tuning.max_confidence);
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_significant_parameters_gives_floor() {
        let tuning = EngineTuning::default();
        let score = aggregate_confidence(0, 8, &[], &tuning);
        assert!((score - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_all_significant_high_local_caps_at_max() {
        let tuning = EngineTuning::default();
        let score = aggregate_confidence(8, 8, &[1.0; 8], &tuning);
        assert!((score - tuning.max_confidence).abs() < 1e-6);
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        let tuning = EngineTuning::default();
        let score = aggregate_confidence(3, 8, &[0.7, 0.8, 0.9], &tuning);
        assert!((score * 100.0 - (score * 100.0).round()).abs() < 1e-4);
        assert!(score > 0.0 && score <= tuning.max_confidence);
    }

    #[test]
    fn test_more_significant_parameters_score_higher() {
        let tuning = EngineTuning::default();
        let few = aggregate_confidence(2, 8, &[0.8, 0.8], &tuning);
        let many = aggregate_confidence(6, 8, &[0.8; 6], &tuning);
        assert!(many > few);
    }
}
