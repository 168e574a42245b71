//! Parameter inference over a pixel buffer.
//!
//! Each analyzer measures one statistic of the image, compares it against a
//! tunable neutral reference, and reports a signed deviation plus a local
//! confidence. Deviations are expressed in the parameter's output unit
//! (percent, Kelvin, or degrees) so a reading can feed straight back into
//! synthesis.

mod chroma;
mod confidence;
mod detail;
mod report;
mod stats;
mod suggestions;
mod tone;

#[cfg(test)]
mod tests;

pub use report::{AnalysisResult, ParameterReading};

use std::time::Instant;

use crate::buffer::PixelBuffer;
use crate::color::ColorViews;
use crate::config::EngineTuning;
use crate::error::EngineError;
use crate::params::Parameter;
use crate::verbose_println;

/// A single analyzer's estimate for its parameter.
pub(crate) struct Estimate {
    /// Signed deviation in the parameter's unit. Zero when the statistic is
    /// degenerate (flat, achromatic, or an unpopulated region).
    pub deviation: f32,
    /// Local confidence in 0.0-1.0.
    pub confidence: f32,
    /// Optional analyzer-provided direction label overriding the generic
    /// sign label, used by the hue analyzer for sector names.
    pub direction: Option<&'static str>,
}

/// One look parameter estimator.
pub(crate) trait Analyzer: Sync {
    fn parameter(&self) -> Parameter;
    fn estimate(&self, views: &ColorViews, tuning: &EngineTuning) -> Estimate;
}

fn analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(tone::Brightness),
        Box::new(tone::Contrast),
        Box::new(chroma::Saturation),
        Box::new(detail::Sharpness),
        Box::new(chroma::Temperature),
        Box::new(chroma::Hue),
        Box::new(tone::Shadow),
        Box::new(tone::Highlight),
    ]
}

/// Run all eight analyzers over a buffer and assemble the report.
///
/// # Arguments
/// * `buffer` - Decoded RGB pixel data
/// * `tuning` - Reference values and thresholds
///
/// # Returns
/// An [`AnalysisResult`] holding one reading per parameter in canonical
/// order, an aggregate confidence score, and textual suggestions.
pub fn analyze(buffer: &PixelBuffer, tuning: &EngineTuning) -> Result<AnalysisResult, EngineError> {
    let start = Instant::now();

    let views = ColorViews::build(buffer);

    let mut readings = Vec::with_capacity(Parameter::ALL.len());
    let mut local_confidences = Vec::with_capacity(Parameter::ALL.len());
    let mut significant = 0usize;

    for analyzer in analyzers() {
        let parameter = analyzer.parameter();
        let estimate = analyzer.estimate(&views, tuning);

        verbose_println!(
            "{}: deviation {:.2} {} (confidence {:.2})",
            parameter.name(),
            estimate.deviation,
            parameter.unit(),
            estimate.confidence
        );

        if report::is_significant(parameter, estimate.deviation, tuning) {
            significant += 1;
            local_confidences.push(estimate.confidence);
        }

        readings.push(ParameterReading::from_estimate(parameter, &estimate));
    }

    let confidence_score = confidence::aggregate_confidence(
        significant,
        Parameter::ALL.len(),
        &local_confidences,
        tuning,
    );

    let suggestions = suggestions::build_suggestions(&readings, significant, tuning);

    let analysis_time = start.elapsed().as_secs_f64();
    verbose_println!(
        "Analysis complete in {:.3}s ({} significant parameters)",
        analysis_time,
        significant
    );

    Ok(AnalysisResult {
        image_id: None,
        parameters: readings,
        analysis_time,
        confidence_score,
        suggestions,
    })
}
