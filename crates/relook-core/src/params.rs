//! The eight look parameters and the vector that carries them.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the eight perceptual look parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Brightness,
    Contrast,
    Saturation,
    Sharpness,
    Temperature,
    Hue,
    Shadow,
    Highlight,
}

impl Parameter {
    /// All parameters in canonical report order.
    pub const ALL: [Parameter; 8] = [
        Parameter::Brightness,
        Parameter::Contrast,
        Parameter::Saturation,
        Parameter::Sharpness,
        Parameter::Temperature,
        Parameter::Hue,
        Parameter::Shadow,
        Parameter::Highlight,
    ];

    /// Snake-case name used in serialized reports and CLI overrides.
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Brightness => "brightness",
            Parameter::Contrast => "contrast",
            Parameter::Saturation => "saturation",
            Parameter::Sharpness => "sharpness",
            Parameter::Temperature => "temperature",
            Parameter::Hue => "hue",
            Parameter::Shadow => "shadow",
            Parameter::Highlight => "highlight",
        }
    }

    /// Unit the parameter's deviation is reported in.
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Temperature => "K",
            Parameter::Hue => "deg",
            _ => "%",
        }
    }

    /// Inclusive valid range for a parameter vector field.
    pub fn range(&self) -> (f32, f32) {
        match self {
            Parameter::Temperature => (-500.0, 500.0),
            Parameter::Hue => (-180.0, 180.0),
            _ => (-100.0, 100.0),
        }
    }

    /// Deviations at or below this magnitude are treated as no-ops during
    /// synthesis.
    pub fn skip_epsilon(&self) -> f32 {
        match self {
            Parameter::Temperature => 10.0,
            Parameter::Hue => 5.0,
            _ => 1.0,
        }
    }

    /// Resolve a parameter from its serialized name.
    pub fn from_name(name: &str) -> Option<Parameter> {
        Parameter::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Human label for the sign of a deviation.
    ///
    /// Hue deviations are labeled by the analyzer's dominant sector instead,
    /// so this returns a generic lean for hue.
    pub fn direction_label(&self, deviation: f32) -> &'static str {
        if deviation == 0.0 {
            return "no change";
        }
        let positive = deviation > 0.0;
        match self {
            Parameter::Brightness | Parameter::Contrast | Parameter::Saturation => {
                if positive {
                    "increase"
                } else {
                    "decrease"
                }
            }
            Parameter::Sharpness => {
                if positive {
                    "sharpen"
                } else {
                    "soften"
                }
            }
            Parameter::Temperature => {
                if positive {
                    "warmer"
                } else {
                    "cooler"
                }
            }
            Parameter::Hue => {
                if positive {
                    "shift forward"
                } else {
                    "shift backward"
                }
            }
            Parameter::Shadow => {
                if positive {
                    "brighten"
                } else {
                    "darken"
                }
            }
            Parameter::Highlight => {
                if positive {
                    "raise"
                } else {
                    "lower"
                }
            }
        }
    }
}

fn default_zero() -> f32 {
    0.0
}

/// Complete set of signed deviations describing a look.
///
/// Percent-scale fields are valid in -100.0 to 100.0, `temperature` in
/// -500.0 to 500.0 Kelvin, `hue` in -180.0 to 180.0 degrees. A vector with
/// any field outside its range is rejected as a whole, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterVector {
    #[serde(default = "default_zero")]
    pub brightness: f32,
    #[serde(default = "default_zero")]
    pub contrast: f32,
    #[serde(default = "default_zero")]
    pub saturation: f32,
    #[serde(default = "default_zero")]
    pub sharpness: f32,
    #[serde(default = "default_zero")]
    pub temperature: f32,
    #[serde(default = "default_zero")]
    pub hue: f32,
    #[serde(default = "default_zero")]
    pub shadow: f32,
    #[serde(default = "default_zero")]
    pub highlight: f32,
}

impl Default for ParameterVector {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            sharpness: 0.0,
            temperature: 0.0,
            hue: 0.0,
            shadow: 0.0,
            highlight: 0.0,
        }
    }
}

impl ParameterVector {
    /// Build a validated vector from explicit field values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brightness: f32,
        contrast: f32,
        saturation: f32,
        sharpness: f32,
        temperature: f32,
        hue: f32,
        shadow: f32,
        highlight: f32,
    ) -> Result<Self, EngineError> {
        let vector = Self {
            brightness,
            contrast,
            saturation,
            sharpness,
            temperature,
            hue,
            shadow,
            highlight,
        };
        vector.validate()?;
        Ok(vector)
    }

    /// Check every field against its declared range.
    ///
    /// Non-finite values always fail. Returns the first offending field.
    pub fn validate(&self) -> Result<(), EngineError> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            let (min, max) = parameter.range();
            if !value.is_finite() || value < min || value > max {
                return Err(EngineError::InvalidParameter {
                    field: parameter.name(),
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::Brightness => self.brightness,
            Parameter::Contrast => self.contrast,
            Parameter::Saturation => self.saturation,
            Parameter::Sharpness => self.sharpness,
            Parameter::Temperature => self.temperature,
            Parameter::Hue => self.hue,
            Parameter::Shadow => self.shadow,
            Parameter::Highlight => self.highlight,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: f32) {
        match parameter {
            Parameter::Brightness => self.brightness = value,
            Parameter::Contrast => self.contrast = value,
            Parameter::Saturation => self.saturation = value,
            Parameter::Sharpness => self.sharpness = value,
            Parameter::Temperature => self.temperature = value,
            Parameter::Hue => self.hue = value,
            Parameter::Shadow => self.shadow = value,
            Parameter::Highlight => self.highlight = value,
        }
    }

    /// Vector with every deviation sign-flipped.
    ///
    /// Applying the negated vector approximately undoes the look described
    /// by the original, within the limits of the clamped transforms.
    pub fn negated(&self) -> Self {
        Self {
            brightness: -self.brightness,
            contrast: -self.contrast,
            saturation: -self.saturation,
            sharpness: -self.sharpness,
            temperature: -self.temperature,
            hue: -self.hue,
            shadow: -self.shadow,
            highlight: -self.highlight,
        }
    }

    /// True when every field is within its skip epsilon of zero.
    pub fn is_identity(&self) -> bool {
        Parameter::ALL
            .iter()
            .all(|&p| self.get(p).abs() <= p.skip_epsilon())
    }

    /// Parse and validate a JSON-encoded vector.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let vector: ParameterVector = serde_json::from_str(json)
            .map_err(|e| EngineError::MalformedVector(e.to_string()))?;
        vector.validate()?;
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vector_is_identity() {
        let vector = ParameterVector::default();
        assert!(vector.is_identity());
        assert!(vector.validate().is_ok());
    }

    #[test]
    fn test_saturation_150_rejected() {
        let mut vector = ParameterVector::default();
        vector.saturation = 150.0;

        match vector.validate() {
            Err(EngineError::InvalidParameter { field, value, .. }) => {
                assert_eq!(field, "saturation");
                assert_eq!(value, 150.0);
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_saturation_100_accepted() {
        let mut vector = ParameterVector::default();
        vector.saturation = 100.0;
        assert!(vector.validate().is_ok());
    }

    #[test]
    fn test_temperature_and_hue_ranges() {
        assert!(ParameterVector::new(0.0, 0.0, 0.0, 0.0, 500.0, -180.0, 0.0, 0.0).is_ok());
        assert!(ParameterVector::new(0.0, 0.0, 0.0, 0.0, 501.0, 0.0, 0.0, 0.0).is_err());
        assert!(ParameterVector::new(0.0, 0.0, 0.0, 0.0, 0.0, 180.5, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let mut vector = ParameterVector::default();
        vector.brightness = f32::NAN;
        assert!(vector.validate().is_err());
    }

    #[test]
    fn test_from_json_partial_fields_default_to_zero() {
        let vector = ParameterVector::from_json(r#"{"brightness": 12.5, "hue": -30.0}"#).unwrap();
        assert_eq!(vector.brightness, 12.5);
        assert_eq!(vector.hue, -30.0);
        assert_eq!(vector.contrast, 0.0);
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        let result = ParameterVector::from_json(r#"{"brightnes": 10.0}"#);
        assert!(matches!(result, Err(EngineError::MalformedVector(_))));
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let result = ParameterVector::from_json(r#"{"contrast": -120.0}"#);
        assert!(matches!(result, Err(EngineError::InvalidParameter { .. })));
    }

    #[test]
    fn test_negated_flips_all_signs() {
        let vector =
            ParameterVector::new(10.0, -5.0, 20.0, -15.0, 250.0, -45.0, 8.0, -3.0).unwrap();
        let negated = vector.negated();

        for parameter in Parameter::ALL {
            assert_eq!(negated.get(parameter), -vector.get(parameter));
        }
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(Parameter::Brightness.direction_label(10.0), "increase");
        assert_eq!(Parameter::Brightness.direction_label(-10.0), "decrease");
        assert_eq!(Parameter::Temperature.direction_label(200.0), "warmer");
        assert_eq!(Parameter::Sharpness.direction_label(-4.0), "soften");
        assert_eq!(Parameter::Shadow.direction_label(5.0), "brighten");
        assert_eq!(Parameter::Highlight.direction_label(-5.0), "lower");
        assert_eq!(Parameter::Shadow.direction_label(0.0), "no change");
    }

    #[test]
    fn test_from_name_roundtrip() {
        for parameter in Parameter::ALL {
            assert_eq!(Parameter::from_name(parameter.name()), Some(parameter));
        }
        assert_eq!(Parameter::from_name("vibrance"), None);
    }
}
