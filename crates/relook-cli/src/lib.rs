//! Shared utilities for relook-cli
//!
//! Helpers reused across the CLI commands: override string parsing and
//! input/output path handling.

pub mod commands;
pub mod parsers;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use parsers::{apply_overrides, parse_overrides};
pub use processing::{determine_output_path, expand_inputs, SUPPORTED_EXTENSIONS};
