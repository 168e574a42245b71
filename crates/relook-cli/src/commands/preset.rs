use std::path::PathBuf;

use relook_core::presets::{
    list_look_presets, load_look_preset, save_look_preset, LookPreset,
};
use relook_core::{Parameter, ParameterVector};

use crate::parsers::{apply_overrides, parse_overrides};

/// List available look presets.
pub fn cmd_preset_list() -> Result<(), String> {
    let names = list_look_presets()?;

    if names.is_empty() {
        println!("No presets saved yet. Create one with 'relook preset create' or");
        println!("'relook analyze <image> --save-preset <name>'.");
        return Ok(());
    }

    println!("Available presets:");
    for name in names {
        println!("  {}", name);
    }
    Ok(())
}

/// Show the contents of one preset.
pub fn cmd_preset_show(name: String, json: bool) -> Result<(), String> {
    let preset = load_look_preset(&name)?;

    if json {
        let rendered = serde_json::to_string_pretty(&preset)
            .map_err(|e| format!("Failed to serialize preset: {}", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("Preset: {}", preset.name);
    if let Some(notes) = &preset.notes {
        println!("Notes:  {}", notes);
    }
    println!();
    for parameter in Parameter::ALL {
        let value = preset.parameters.get(parameter);
        println!("  {:<12} {:>8.1} {}", parameter.name(), value, parameter.unit());
    }
    Ok(())
}

/// Create a preset from explicit parameter values or a JSON vector file.
pub fn cmd_preset_create(
    name: String,
    set: Option<String>,
    params: Option<PathBuf>,
    notes: Option<String>,
) -> Result<(), String> {
    let parameters = match (&set, &params) {
        (Some(_), Some(_)) => {
            return Err("Use either --set or --params, not both".to_string());
        }
        (Some(spec), None) => {
            apply_overrides(ParameterVector::default(), &parse_overrides(spec)?)?
        }
        (None, Some(path)) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            ParameterVector::from_json(&contents).map_err(|e| e.to_string())?
        }
        (None, None) => {
            return Err("No parameters given: use --set or --params".to_string());
        }
    };

    let preset = LookPreset {
        name,
        parameters,
        notes,
    };
    let path = save_look_preset(&preset)?;
    println!("Created preset '{}' at {}", preset.name, path.display());
    Ok(())
}
