//! Relook Core Library
//!
//! Infers eight perceptual look parameters (brightness, contrast,
//! saturation, sharpness, color temperature, hue, shadow, highlight) from a
//! photograph, and renders a parameter vector back onto pixel data to
//! reproduce the look on another image.

pub mod analysis;
pub mod buffer;
pub mod codec;
pub mod color;
pub mod config;
pub mod error;
pub mod params;
pub mod presets;
pub mod synthesis;

mod parallel;

// Re-export commonly used types
pub use analysis::{analyze, AnalysisResult, ParameterReading};
pub use buffer::PixelBuffer;
pub use color::{Hsv, Lab};
pub use error::EngineError;
pub use params::{Parameter, ParameterVector};
pub use synthesis::synthesize;
