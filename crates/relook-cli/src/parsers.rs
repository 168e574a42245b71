//! Parsing of command-line parameter overrides.

use relook_core::{Parameter, ParameterVector};

/// Parse a comma-separated override string like
/// `"brightness=12.5,temperature=-200"` into (parameter, value) pairs.
pub fn parse_overrides(spec: &str) -> Result<Vec<(Parameter, f32)>, String> {
    let mut overrides = Vec::new();

    for entry in spec.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("Invalid override '{}': expected name=value", entry))?;

        let parameter = Parameter::from_name(name.trim()).ok_or_else(|| {
            format!(
                "Unknown parameter '{}': expected one of {}",
                name.trim(),
                Parameter::ALL
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;

        let value: f32 = value
            .trim()
            .parse()
            .map_err(|_| format!("Invalid value '{}' for {}", value.trim(), parameter.name()))?;

        overrides.push((parameter, value));
    }

    if overrides.is_empty() {
        return Err("No overrides given".to_string());
    }

    Ok(overrides)
}

/// Apply overrides on top of a base vector and validate the result.
pub fn apply_overrides(
    mut vector: ParameterVector,
    overrides: &[(Parameter, f32)],
) -> Result<ParameterVector, String> {
    for &(parameter, value) in overrides {
        vector.set(parameter, value);
    }
    vector.validate().map_err(|e| e.to_string())?;
    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_override() {
        let overrides = parse_overrides("brightness=12.5").unwrap();
        assert_eq!(overrides, vec![(Parameter::Brightness, 12.5)]);
    }

    #[test]
    fn test_parse_multiple_overrides() {
        let overrides = parse_overrides("contrast=-10, temperature=250,hue=30").unwrap();
        assert_eq!(
            overrides,
            vec![
                (Parameter::Contrast, -10.0),
                (Parameter::Temperature, 250.0),
                (Parameter::Hue, 30.0),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_parameter() {
        assert!(parse_overrides("vibrance=10").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_value() {
        assert!(parse_overrides("brightness=abc").is_err());
        assert!(parse_overrides("brightness").is_err());
        assert!(parse_overrides("").is_err());
    }

    #[test]
    fn test_apply_overrides_validates() {
        let overrides = parse_overrides("saturation=150").unwrap();
        let result = apply_overrides(ParameterVector::default(), &overrides);
        assert!(result.is_err());

        let overrides = parse_overrides("saturation=80").unwrap();
        let vector = apply_overrides(ParameterVector::default(), &overrides).unwrap();
        assert_eq!(vector.saturation, 80.0);
    }
}
