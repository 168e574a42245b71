//! Command implementations for the relook CLI.

mod analyze;
mod apply;
mod batch;
mod preset;

// Re-export all command functions
pub use analyze::cmd_analyze;
pub use apply::cmd_apply;
pub use batch::cmd_batch;
pub use preset::{cmd_preset_create, cmd_preset_list, cmd_preset_show};

use std::path::PathBuf;

use relook_core::presets::load_look_preset;
use relook_core::ParameterVector;

use crate::parsers::{apply_overrides, parse_overrides};

/// Build the parameter vector a command should apply.
///
/// Base vector comes from a named preset or a JSON file (mutually
/// exclusive), then `--set` overrides are layered on top, then the whole
/// vector is optionally negated. At least one source must be given.
pub(crate) fn resolve_vector(
    preset: &Option<String>,
    params: &Option<PathBuf>,
    set: &Option<String>,
    negate: bool,
) -> Result<ParameterVector, String> {
    if preset.is_some() && params.is_some() {
        return Err("Use either --preset or --params, not both".to_string());
    }

    let base = if let Some(name) = preset {
        load_look_preset(name)?.parameters
    } else if let Some(path) = params {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        ParameterVector::from_json(&contents).map_err(|e| e.to_string())?
    } else if set.is_some() {
        ParameterVector::default()
    } else {
        return Err("No parameters given: use --preset, --params, or --set".to_string());
    };

    let vector = match set {
        Some(spec) => apply_overrides(base, &parse_overrides(spec)?)?,
        None => base,
    };

    Ok(if negate { vector.negated() } else { vector })
}
