//! RGB <-> HSV conversion.

/// HSV color value.
///
/// Hue is degrees in 0.0-360.0, saturation and value are 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Convert RGB (0.0-1.0 per channel) to HSV.
///
/// # Arguments
/// * `r`, `g`, `b` - Channel values in 0.0-1.0
///
/// # Returns
/// Hue in 0.0-360.0 degrees, saturation and value in 0.0-1.0. An achromatic
/// input yields hue 0.0 and saturation 0.0.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta < 1e-6 {
        0.0
    } else if (max - r).abs() < 1e-6 {
        let mut h = 60.0 * ((g - b) / delta);
        if h < 0.0 {
            h += 360.0;
        }
        h
    } else if (max - g).abs() < 1e-6 {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };

    let s = if max < 1e-6 { 0.0 } else { delta / max };

    Hsv { h, s, v: max }
}

/// Convert HSV back to RGB (0.0-1.0 per channel).
pub fn hsv_to_rgb(hsv: Hsv) -> (f32, f32, f32) {
    let h = hsv.h.rem_euclid(360.0);
    let s = hsv.s.clamp(0.0, 1.0);
    let v = hsv.v.clamp(0.0, 1.0);

    if s < 1e-6 {
        return (v, v, v);
    }

    let sector = h / 60.0;
    let i = sector.floor() as i32 % 6;
    let f = sector - sector.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
