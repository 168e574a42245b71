//! Filter synthesis: render a parameter vector onto pixel data.
//!
//! Transforms run in a fixed order on a 0.0-1.0 floating point working
//! buffer, clamping after each step so later steps never see out-of-gamut
//! values. Fields within their skip epsilon of zero are skipped entirely,
//! which makes the all-zero vector an exact identity.

mod kernel;
mod transforms;


use crate::buffer::PixelBuffer;
use crate::config::EngineTuning;
use crate::error::EngineError;
use crate::params::{Parameter, ParameterVector};
use crate::verbose_println;

fn active(vector: &ParameterVector, parameter: Parameter) -> Option<f32> {
    let value = vector.get(parameter);
    if value.abs() > parameter.skip_epsilon() {
        Some(value)
    } else {
        None
    }
}

/// Apply a validated parameter vector to a buffer.
///
/// The vector is validated before any pixel work; a single out-of-range
/// field rejects the whole call and leaves the input untouched.
pub fn synthesize(
    buffer: &PixelBuffer,
    vector: &ParameterVector,
    tuning: &EngineTuning,
) -> Result<PixelBuffer, EngineError> {
    vector.validate()?;

    let width = buffer.width();
    let height = buffer.height();
    let mut working = buffer.to_f32();

    if let Some(amount) = active(vector, Parameter::Brightness) {
        verbose_println!("Applying brightness {:+.1}%", amount);
        transforms::apply_brightness(&mut working, amount);
    }

    if let Some(amount) = active(vector, Parameter::Contrast) {
        verbose_println!("Applying contrast {:+.1}%", amount);
        transforms::apply_contrast(&mut working, amount);
    }

    if let Some(amount) = active(vector, Parameter::Saturation) {
        verbose_println!("Applying saturation {:+.1}%", amount);
        transforms::apply_saturation(&mut working, amount);
    }

    if let Some(amount) = active(vector, Parameter::Temperature) {
        verbose_println!("Applying temperature {:+.0}K", amount);
        transforms::apply_temperature(&mut working, amount);
    }

    if let Some(amount) = active(vector, Parameter::Hue) {
        verbose_println!("Applying hue shift {:+.1} deg", amount);
        transforms::apply_hue(&mut working, amount);
    }

    let shadow = active(vector, Parameter::Shadow);
    let highlight = active(vector, Parameter::Highlight);
    if shadow.is_some() || highlight.is_some() {
        verbose_println!(
            "Applying shadow {:+.1}% / highlight {:+.1}%",
            shadow.unwrap_or(0.0),
            highlight.unwrap_or(0.0)
        );
        transforms::apply_shadow_highlight(
            &mut working,
            shadow.unwrap_or(0.0),
            highlight.unwrap_or(0.0),
            tuning,
        );
    }

    if let Some(amount) = active(vector, Parameter::Sharpness) {
        verbose_println!("Applying sharpness {:+.1}%", amount);
        kernel::apply_sharpness(&mut working, width, height, amount);
    }

    PixelBuffer::from_f32(width, height, &working)
}
