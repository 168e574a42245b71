use super::*;
use crate::buffer::PixelBuffer;
use crate::config::EngineTuning;
use crate::params::Parameter;

fn tuning() -> EngineTuning {
    EngineTuning::default()
}

/// Horizontal luma ramp from black to white.
fn gradient_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for _ in 0..height {
        for x in 0..width {
            let v = (x as f32 / (width - 1) as f32 * 255.0).round() as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    PixelBuffer::from_rgb8(width, height, data).unwrap()
}

#[test]
fn test_mid_gray_has_no_significant_parameters() {
    let buffer = PixelBuffer::filled(100, 100, [128, 128, 128]).unwrap();
    let result = analyze(&buffer, &tuning()).unwrap();

    for reading in &result.parameters {
        assert!(
            !report::is_significant(reading.parameter, reading.signed_deviation, &tuning()),
            "{} reported significant deviation {}",
            reading.name,
            reading.signed_deviation
        );
    }

    assert_eq!(
        result.suggestions,
        vec!["Near neutral: no significant adjustment detected".to_string()]
    );
    assert!((result.confidence_score - 0.1).abs() < 1e-6);
}

#[test]
fn test_bright_image_reads_brighten() {
    let buffer = PixelBuffer::filled(50, 50, [230, 230, 230]).unwrap();
    let result = analyze(&buffer, &tuning()).unwrap();

    let brightness = result.reading(Parameter::Brightness).unwrap();
    assert_eq!(brightness.direction, "increase");
    assert!(brightness.signed_deviation > 50.0);
}

#[test]
fn test_dark_image_reads_darken() {
    let buffer = PixelBuffer::filled(50, 50, [30, 30, 30]).unwrap();
    let result = analyze(&buffer, &tuning()).unwrap();

    let brightness = result.reading(Parameter::Brightness).unwrap();
    assert_eq!(brightness.direction, "decrease");
    assert!(brightness.signed_deviation < -50.0);
}

#[test]
fn test_warm_image_reads_warmer() {
    let buffer = PixelBuffer::filled(50, 50, [200, 150, 100]).unwrap();
    let result = analyze(&buffer, &tuning()).unwrap();

    let temperature = result.reading(Parameter::Temperature).unwrap();
    assert_eq!(temperature.direction, "warmer");
    assert!(temperature.signed_deviation > 50.0);
}

#[test]
fn test_cool_image_reads_cooler() {
    let buffer = PixelBuffer::filled(50, 50, [100, 150, 200]).unwrap();
    let result = analyze(&buffer, &tuning()).unwrap();

    let temperature = result.reading(Parameter::Temperature).unwrap();
    assert_eq!(temperature.direction, "cooler");
    assert!(temperature.signed_deviation < -50.0);
}

#[test]
fn test_gradient_image_has_high_contrast() {
    let buffer = gradient_buffer(256, 64);
    let result = analyze(&buffer, &tuning()).unwrap();

    let contrast = result.reading(Parameter::Contrast).unwrap();
    assert_eq!(contrast.direction, "increase");
    assert!(contrast.signed_deviation > 5.0);
}

#[test]
fn test_confidence_bounded() {
    let buffers = [
        PixelBuffer::filled(40, 40, [128, 128, 128]).unwrap(),
        PixelBuffer::filled(40, 40, [240, 180, 40]).unwrap(),
        gradient_buffer(64, 64),
    ];

    for buffer in &buffers {
        let result = analyze(buffer, &tuning()).unwrap();
        assert!(result.confidence_score >= 0.0);
        assert!(result.confidence_score <= tuning().max_confidence);
    }
}

#[test]
fn test_to_vector_validates() {
    let buffer = PixelBuffer::filled(40, 40, [250, 250, 250]).unwrap();
    let result = analyze(&buffer, &tuning()).unwrap();

    let vector = result.to_vector().unwrap();
    assert!(vector.validate().is_ok());
    assert!(vector.brightness > 0.0);
}

#[test]
fn test_report_serializes_parameters_as_map() {
    let buffer = PixelBuffer::filled(20, 20, [200, 100, 60]).unwrap();
    let result = analyze(&buffer, &tuning()).unwrap().with_image_id("img-1");

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["image_id"], "img-1");
    assert!(json["parameters"]["brightness"]["direction"].is_string());
    assert!(json["parameters"]["temperature"]["unit"] == "K");
    assert!(json["confidence_score"].is_number());
    assert!(json["suggestions"].is_array());
}

#[test]
fn test_suggestion_count_capped() {
    let buffer = PixelBuffer::filled(40, 40, [255, 200, 20]).unwrap();
    let custom = tuning();
    let result = analyze(&buffer, &custom).unwrap();
    assert!(result.suggestions.len() <= custom.max_suggestions);
    assert!(!result.suggestions.is_empty());
}

#[test]
fn test_applying_negated_reading_moves_toward_neutral() {
    let buffer = PixelBuffer::filled(60, 60, [200, 200, 200]).unwrap();

    let before = analyze(&buffer, &tuning()).unwrap();
    let corrective = before.to_vector().unwrap().negated();

    let corrected = crate::synthesize(&buffer, &corrective, &tuning()).unwrap();
    let after = analyze(&corrected, &tuning()).unwrap();

    let total = |result: &AnalysisResult| -> f32 {
        result
            .parameters
            .iter()
            .map(|r| r.signed_deviation.abs())
            .sum()
    };

    assert!(
        total(&after) < total(&before),
        "total deviation should shrink: {} -> {}",
        total(&before),
        total(&after)
    );
}

#[test]
fn test_hue_on_sector_center_reads_no_change() {
    // Pure red sits exactly on the red sector center, so there is no shift
    // to report even though the image is strongly hued.
    let buffer = PixelBuffer::filled(30, 30, [255, 0, 0]).unwrap();
    let result = analyze(&buffer, &tuning()).unwrap();

    let hue = result.reading(Parameter::Hue).unwrap();
    assert_eq!(hue.direction, "no change");
    assert_eq!(hue.value, 0.0);
}

#[test]
fn test_red_hue_sector_label() {
    let buffer = PixelBuffer::filled(30, 30, [220, 120, 90]).unwrap();
    let result = analyze(&buffer, &tuning()).unwrap();

    let hue = result.reading(Parameter::Hue).unwrap();
    assert_eq!(hue.direction, "red leaning");
}
