use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use relook_core::codec::{decode_image, export_image};
use relook_core::config::{set_verbose, tuning_handle};
use relook_core::synthesize;

use crate::processing::{determine_output_path, expand_inputs};

/// Apply one parameter vector to a set of images in parallel.
#[allow(clippy::too_many_arguments)]
pub fn cmd_batch(
    inputs: Vec<PathBuf>,
    recursive: bool,
    preset: Option<String>,
    params: Option<PathBuf>,
    set: Option<String>,
    out: Option<PathBuf>,
    threads: Option<usize>,
    verbose: bool,
) -> Result<(), String> {
    let batch_start = Instant::now();

    set_verbose(verbose);
    let handle = tuning_handle();
    handle.log_usage();

    if inputs.is_empty() {
        return Err("No input files given".to_string());
    }

    // One vector shared by every image in the batch.
    let vector = super::resolve_vector(&preset, &params, &set, false)?;

    let files = expand_inputs(&inputs, recursive)?;
    if files.is_empty() {
        return Err("No supported image files found in the given inputs".to_string());
    }

    if let Some(out_dir) = &out {
        if !out_dir.is_dir() {
            std::fs::create_dir_all(out_dir)
                .map_err(|e| format!("Failed to create {}: {}", out_dir.display(), e))?;
        }
    }

    if let Some(n) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
    }

    println!("Styling {} image(s)...", files.len());

    let completed = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    files.par_iter().for_each(|input| {
        let result = decode_image(input)
            .and_then(|buffer| synthesize(&buffer, &vector, &handle.tuning))
            .map_err(|e| e.to_string())
            .and_then(|styled| {
                let output_path = determine_output_path(input, &out)?;
                export_image(&styled, &output_path, handle.tuning.jpeg_quality)
                    .map_err(|e| e.to_string())?;
                Ok(output_path)
            });

        match result {
            Ok(output_path) => {
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                println!(
                    "[{}/{}] {} -> {}",
                    done,
                    files.len(),
                    input.display(),
                    output_path.display()
                );
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                eprintln!("Failed {}: {}", input.display(), e);
            }
        }
    });

    let succeeded = completed.load(Ordering::Relaxed);
    let failures = failed.load(Ordering::Relaxed);

    println!(
        "Batch complete: {} succeeded, {} failed in {:.2}s",
        succeeded,
        failures,
        batch_start.elapsed().as_secs_f64()
    );

    if failures > 0 {
        return Err(format!("{} image(s) failed", failures));
    }

    Ok(())
}
