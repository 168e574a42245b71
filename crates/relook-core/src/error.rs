//! Engine error taxonomy.
//!
//! Degenerate statistics (an empty shadow or highlight mask, a flat luma
//! distribution) are recovered locally inside the analyzers and never reach
//! this type; the two failure modes the engine surfaces are unreadable
//! input and a rejected parameter vector.

use thiserror::Error;

/// Errors surfaced across the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Decode failure or an empty pixel buffer. Fatal for the call.
    #[error("unable to read image: {0}")]
    ImageUnreadable(String),

    /// A parameter field outside its declared range. A single bad field
    /// rejects the whole vector before any transform runs.
    #[error("parameter `{field}` out of range: {value} (valid {min} to {max})")]
    InvalidParameter {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// A vector that does not deserialize to the eight known fields.
    #[error("malformed parameter vector: {0}")]
    MalformedVector(String),

    /// Filesystem failure while persisting an output image.
    #[error("i/o failure: {0}")]
    Io(String),
}
