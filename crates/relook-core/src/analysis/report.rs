//! Analysis report types and serialization.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::analysis::Estimate;
use crate::config::EngineTuning;
use crate::error::EngineError;
use crate::params::{Parameter, ParameterVector};

/// One parameter's inferred deviation, shaped for reporting.
///
/// `value` is the magnitude rounded to one decimal; the sign lives in the
/// `direction` label. The signed deviation is kept alongside for feeding
/// back into a [`ParameterVector`].
#[derive(Debug, Clone, Serialize)]
pub struct ParameterReading {
    pub name: &'static str,
    pub direction: &'static str,
    pub value: f32,
    pub unit: &'static str,
    pub reference: &'static str,
    #[serde(skip)]
    pub parameter: Parameter,
    #[serde(skip)]
    pub signed_deviation: f32,
}

impl ParameterReading {
    pub(crate) fn from_estimate(parameter: Parameter, estimate: &Estimate) -> Self {
        let direction = estimate
            .direction
            .unwrap_or_else(|| parameter.direction_label(estimate.deviation));

        Self {
            name: parameter.name(),
            direction,
            value: (estimate.deviation.abs() * 10.0).round() / 10.0,
            unit: parameter.unit(),
            reference: reference_label(parameter),
            parameter,
            signed_deviation: estimate.deviation,
        }
    }
}

fn reference_label(parameter: Parameter) -> &'static str {
    match parameter {
        Parameter::Brightness => "mid-tone mean luma",
        Parameter::Contrast => "neutral luma spread",
        Parameter::Saturation => "neutral mean saturation",
        Parameter::Sharpness => "neutral edge energy",
        Parameter::Temperature => "neutral channel balance",
        Parameter::Hue => "sector center",
        Parameter::Shadow => "neutral shadow depth",
        Parameter::Highlight => "neutral highlight level",
    }
}

/// True when a deviation magnitude clears the significance threshold.
///
/// The threshold is defined in percent; temperature and hue deviations are
/// mapped onto the percent scale through their own ranges so one threshold
/// governs all eight parameters.
pub(crate) fn is_significant(parameter: Parameter, deviation: f32, tuning: &EngineTuning) -> bool {
    let (_, max) = parameter.range();
    let percent_scale = deviation.abs() / max * 100.0;
    percent_scale >= tuning.significance_threshold
}

fn serialize_readings<S>(readings: &[ParameterReading], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(readings.len()))?;
    for reading in readings {
        map.serialize_entry(reading.name, reading)?;
    }
    map.end()
}

/// Full analysis report for one image.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Readings in canonical parameter order, serialized as a name-keyed map.
    #[serde(serialize_with = "serialize_readings")]
    pub parameters: Vec<ParameterReading>,
    /// Wall-clock analysis time in seconds.
    pub analysis_time: f64,
    /// Aggregate confidence in 0.0 to the configured maximum.
    pub confidence_score: f32,
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    /// Attach a caller-supplied identifier to the report.
    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    /// Look up the reading for one parameter.
    pub fn reading(&self, parameter: Parameter) -> Option<&ParameterReading> {
        self.parameters.iter().find(|r| r.parameter == parameter)
    }

    /// Convert the readings back into an applicable parameter vector.
    ///
    /// Deviations are clamped into each parameter's declared range so the
    /// resulting vector always validates; an extreme image can measure past
    /// the range a vector is allowed to carry.
    pub fn to_vector(&self) -> Result<ParameterVector, EngineError> {
        let mut vector = ParameterVector::default();
        for reading in &self.parameters {
            let (min, max) = reading.parameter.range();
            vector.set(reading.parameter, reading.signed_deviation.clamp(min, max));
        }
        vector.validate()?;
        Ok(vector)
    }
}
