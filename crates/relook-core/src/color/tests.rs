use super::*;
use crate::buffer::PixelBuffer;

const EPSILON: f32 = 1e-3;

#[test]
fn test_rgb_to_hsv_primaries() {
    let red = rgb_to_hsv(1.0, 0.0, 0.0);
    assert!((red.h - 0.0).abs() < EPSILON);
    assert!((red.s - 1.0).abs() < EPSILON);
    assert!((red.v - 1.0).abs() < EPSILON);

    let green = rgb_to_hsv(0.0, 1.0, 0.0);
    assert!((green.h - 120.0).abs() < EPSILON);

    let blue = rgb_to_hsv(0.0, 0.0, 1.0);
    assert!((blue.h - 240.0).abs() < EPSILON);
}

#[test]
fn test_rgb_to_hsv_achromatic() {
    let gray = rgb_to_hsv(0.5, 0.5, 0.5);
    assert!((gray.h - 0.0).abs() < EPSILON);
    assert!((gray.s - 0.0).abs() < EPSILON);
    assert!((gray.v - 0.5).abs() < EPSILON);
}

#[test]
fn test_hsv_roundtrip() {
    let cases = [
        (0.8, 0.2, 0.4),
        (0.1, 0.9, 0.3),
        (0.5, 0.5, 0.5),
        (1.0, 1.0, 0.0),
        (0.0, 0.0, 0.0),
    ];

    for (r, g, b) in cases {
        let hsv = rgb_to_hsv(r, g, b);
        let (r2, g2, b2) = hsv_to_rgb(hsv);
        assert!((r - r2).abs() < EPSILON, "r mismatch for {:?}", (r, g, b));
        assert!((g - g2).abs() < EPSILON, "g mismatch for {:?}", (r, g, b));
        assert!((b - b2).abs() < EPSILON, "b mismatch for {:?}", (r, g, b));
    }
}

#[test]
fn test_hue_wraps_modulo_360() {
    let (r1, g1, b1) = hsv_to_rgb(Hsv { h: 30.0, s: 0.7, v: 0.9 });
    let (r2, g2, b2) = hsv_to_rgb(Hsv { h: 390.0, s: 0.7, v: 0.9 });
    let (r3, g3, b3) = hsv_to_rgb(Hsv { h: -330.0, s: 0.7, v: 0.9 });

    assert!((r1 - r2).abs() < EPSILON && (g1 - g2).abs() < EPSILON && (b1 - b2).abs() < EPSILON);
    assert!((r1 - r3).abs() < EPSILON && (g1 - g3).abs() < EPSILON && (b1 - b3).abs() < EPSILON);
}

#[test]
fn test_lab_white_and_black() {
    let white = rgb_to_lab(1.0, 1.0, 1.0);
    assert!((white.l - 100.0).abs() < 0.1);
    assert!(white.a.abs() < 0.1);
    assert!(white.b.abs() < 0.1);

    let black = rgb_to_lab(0.0, 0.0, 0.0);
    assert!(black.l.abs() < 0.1);
}

#[test]
fn test_lab_chroma_zero_for_gray() {
    let gray = rgb_to_lab(0.42, 0.42, 0.42);
    assert!(gray.chroma() < 0.1);

    let red = rgb_to_lab(1.0, 0.0, 0.0);
    assert!(red.chroma() > 50.0);
}

#[test]
fn test_luma_weights() {
    assert!((luma(1.0, 0.0, 0.0) - 0.299).abs() < EPSILON);
    assert!((luma(0.0, 1.0, 0.0) - 0.587).abs() < EPSILON);
    assert!((luma(0.0, 0.0, 1.0) - 0.114).abs() < EPSILON);
    assert!((luma(1.0, 1.0, 1.0) - 1.0).abs() < EPSILON);
}

#[test]
fn test_views_mid_gray() {
    let buffer = PixelBuffer::filled(10, 10, [128, 128, 128]).unwrap();
    let views = ColorViews::build(&buffer);

    assert_eq!(views.num_pixels(), 100);
    assert!((views.luma[0] - 128.0).abs() < 0.5);
    assert!(views.hsv[0].s < EPSILON);
    assert!(views.lab[0].chroma() < 0.1);
    assert!((views.channel_means[0] - 128.0).abs() < 0.5);
    assert!((views.channel_means[2] - 128.0).abs() < 0.5);
}
