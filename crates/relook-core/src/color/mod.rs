//! Color space types and conversions used by the analyzers.

pub mod hsv;
pub mod lab;
pub mod views;

#[cfg(test)]
mod tests;

pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use lab::{rgb_to_lab, Lab};
pub use views::ColorViews;

/// Rec. 601 luma from 0.0-1.0 RGB components, same scale as the input.
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    0.299 * r + 0.587 * g + 0.114 * b
}
