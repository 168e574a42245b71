use std::path::PathBuf;

use relook_core::analysis::analyze;
use relook_core::codec::decode_image;
use relook_core::config::{set_verbose, tuning_handle};
use relook_core::presets::{save_look_preset, LookPreset};

/// Infer the look parameters of an image and print the report.
pub fn cmd_analyze(
    input: PathBuf,
    json: bool,
    save: Option<PathBuf>,
    save_preset: Option<String>,
    verbose: bool,
) -> Result<(), String> {
    set_verbose(verbose);
    let handle = tuning_handle();
    handle.log_usage();

    let buffer = decode_image(&input).map_err(|e| e.to_string())?;
    let image_id = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| input.display().to_string());

    let result = analyze(&buffer, &handle.tuning)
        .map_err(|e| e.to_string())?
        .with_image_id(image_id);

    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", rendered);
    } else {
        println!(
            "Look analysis for {} ({}x{})",
            input.display(),
            buffer.width(),
            buffer.height()
        );
        println!();
        for reading in &result.parameters {
            println!(
                "  {:<12} {:<16} {:>7.1} {:<3}  (vs {})",
                reading.name, reading.direction, reading.value, reading.unit, reading.reference
            );
        }
        println!();
        println!("Confidence: {:.2}", result.confidence_score);
        println!("Analysis time: {:.3}s", result.analysis_time);
        if !result.suggestions.is_empty() {
            println!();
            println!("Suggestions:");
            for suggestion in &result.suggestions {
                println!("  - {}", suggestion);
            }
        }
    }

    let vector = result.to_vector().map_err(|e| e.to_string())?;

    if let Some(path) = save {
        let rendered = serde_json::to_string_pretty(&vector)
            .map_err(|e| format!("Failed to serialize parameters: {}", e))?;
        std::fs::write(&path, rendered)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        println!("Saved parameter vector to {}", path.display());
    }

    if let Some(name) = save_preset {
        let preset = LookPreset {
            name,
            parameters: vector,
            notes: Some(format!("Extracted from {}", input.display())),
        };
        let path = save_look_preset(&preset)?;
        println!("Saved preset '{}' to {}", preset.name, path.display());
    }

    Ok(())
}
