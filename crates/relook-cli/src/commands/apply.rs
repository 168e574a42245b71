use std::path::PathBuf;
use std::time::Instant;

use relook_core::codec::{decode_image, downscale_to_fit, export_image};
use relook_core::config::{set_verbose, tuning_handle};
use relook_core::synthesize;

use crate::processing::determine_output_path;

/// Apply a parameter vector to a single image.
#[allow(clippy::too_many_arguments)]
pub fn cmd_apply(
    input: PathBuf,
    out: Option<PathBuf>,
    preset: Option<String>,
    params: Option<PathBuf>,
    set: Option<String>,
    negate: bool,
    max_dimension: Option<u32>,
    quality: Option<u8>,
    verbose: bool,
) -> Result<(), String> {
    set_verbose(verbose);
    let handle = tuning_handle();
    handle.log_usage();

    let vector = super::resolve_vector(&preset, &params, &set, negate)?;

    let start = Instant::now();
    println!("Styling {}...", input.display());

    let mut buffer = decode_image(&input).map_err(|e| e.to_string())?;

    if let Some(limit) = max_dimension {
        buffer = downscale_to_fit(&buffer, limit).map_err(|e| e.to_string())?;
    }

    let styled =
        synthesize(&buffer, &vector, &handle.tuning).map_err(|e| e.to_string())?;

    let output_path = determine_output_path(&input, &out)?;
    let jpeg_quality = quality.unwrap_or(handle.tuning.jpeg_quality);
    export_image(&styled, &output_path, jpeg_quality).map_err(|e| e.to_string())?;

    println!(
        "Wrote {} ({}x{}) in {:.2}s",
        output_path.display(),
        styled.width(),
        styled.height(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
