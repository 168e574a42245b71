//! Named look presets stored as YAML files.
//!
//! A preset is a parameter vector with a name and optional notes, kept in
//! `~/relook/presets/<name>.yml` so a look extracted from one image can be
//! reapplied by name later.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::params::ParameterVector;

/// A saved look.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookPreset {
    pub name: String,
    pub parameters: ParameterVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Check that a preset name is safe to use as a file name.
pub fn validate_preset_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Preset name cannot be empty".to_string());
    }
    if name.len() > 64 {
        return Err("Preset name too long (max 64 characters)".to_string());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "Invalid preset name '{}': use letters, digits, '-' and '_' only",
            name
        ));
    }
    Ok(())
}

/// Directory holding preset files, created on demand.
pub fn get_presets_dir() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or_else(|| "Could not determine home directory".to_string())?;
    let dir = home.join("relook").join("presets");
    if !dir.is_dir() {
        fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create presets directory: {}", e))?;
    }
    Ok(dir)
}

/// Persist a preset, overwriting any existing preset with the same name.
pub fn save_look_preset(preset: &LookPreset) -> Result<PathBuf, String> {
    validate_preset_name(&preset.name)?;
    preset
        .parameters
        .validate()
        .map_err(|e| e.to_string())?;

    let path = get_presets_dir()?.join(format!("{}.yml", preset.name));
    let yaml = serde_yaml::to_string(preset)
        .map_err(|e| format!("Failed to serialize preset: {}", e))?;
    fs::write(&path, yaml).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(path)
}

/// Load a preset by name, validating its vector.
pub fn load_look_preset(name: &str) -> Result<LookPreset, String> {
    validate_preset_name(name)?;

    let path = get_presets_dir()?.join(format!("{}.yml", name));
    if !path.is_file() {
        return Err(format!("Preset '{}' not found", name));
    }

    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let preset: LookPreset = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    preset
        .parameters
        .validate()
        .map_err(|e| format!("Preset '{}' is invalid: {}", name, e))?;
    Ok(preset)
}

/// Names of all stored presets, sorted.
pub fn list_look_presets() -> Result<Vec<String>, String> {
    let dir = get_presets_dir()?;
    let mut names = Vec::new();

    let entries =
        fs::read_dir(&dir).map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        );
        if is_yaml {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}
