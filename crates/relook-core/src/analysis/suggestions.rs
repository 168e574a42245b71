//! Textual suggestions derived from the readings.

use crate::analysis::report::{is_significant, ParameterReading};
use crate::config::EngineTuning;
use crate::params::Parameter;

fn signed(readings: &[ParameterReading], parameter: Parameter) -> f32 {
    readings
        .iter()
        .find(|r| r.parameter == parameter)
        .map(|r| r.signed_deviation)
        .unwrap_or(0.0)
}

/// Build up to `max_suggestions` human-readable notes about the look.
pub(crate) fn build_suggestions(
    readings: &[ParameterReading],
    significant: usize,
    tuning: &EngineTuning,
) -> Vec<String> {
    if readings.is_empty() {
        return vec!["Analysis incomplete: no parameter readings available".to_string()];
    }

    if significant == 0 {
        return vec!["Near neutral: no significant adjustment detected".to_string()];
    }

    let mut suggestions = Vec::new();

    let brightness = signed(readings, Parameter::Brightness);
    if is_significant(Parameter::Brightness, brightness, tuning) {
        if brightness < 0.0 {
            suggestions.push("Dark exposure: lifts mood for low-key or night scenes".to_string());
        } else {
            suggestions.push("Bright exposure: suits airy, high-key subjects".to_string());
        }
    }

    let contrast = signed(readings, Parameter::Contrast);
    if is_significant(Parameter::Contrast, contrast, tuning) {
        if contrast < 0.0 {
            suggestions.push("Flat tone curve: a soft, faded rendering".to_string());
        } else {
            suggestions.push("Strong contrast: punchy separation between tones".to_string());
        }
    }

    let saturation = signed(readings, Parameter::Saturation);
    if is_significant(Parameter::Saturation, saturation, tuning) {
        if saturation > 0.0 {
            suggestions
                .push("Rich color: suited to landscape and floral subjects".to_string());
        } else {
            suggestions.push("Muted color: understated palette close to monochrome".to_string());
        }
    }

    let temperature = signed(readings, Parameter::Temperature);
    if is_significant(Parameter::Temperature, temperature, tuning) {
        if temperature > 0.0 {
            suggestions.push("Warm cast: suited to autumn and dusk scenes".to_string());
        } else {
            suggestions.push("Cool cast: clean look for overcast and winter light".to_string());
        }
    }

    let sharpness = signed(readings, Parameter::Sharpness);
    if is_significant(Parameter::Sharpness, sharpness, tuning) && sharpness < 0.0 {
        suggestions.push("Soft detail: dreamy rendering, flattering for portraits".to_string());
    }

    if significant >= 5 {
        suggestions.push("Complex multi-parameter look: apply as a whole vector".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Distinctive look detected in secondary parameters".to_string());
    }

    suggestions.truncate(tuning.max_suggestions);
    suggestions
}
