//! Input file handling and path utilities.

use std::path::{Path, PathBuf};

/// Supported image extensions for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Determine output path based on input and optional output location.
///
/// # Arguments
/// * `input` - Input file path
/// * `out` - Optional output directory or file path
///
/// # Returns
/// The full output path for the styled image
pub fn determine_output_path(input: &Path, out: &Option<PathBuf>) -> Result<PathBuf, String> {
    if let Some(out_path) = out {
        // If out is a directory, use input filename with the default suffix
        if out_path.is_dir() {
            let filename = input
                .file_stem()
                .ok_or("Invalid input filename")?
                .to_string_lossy();
            Ok(out_path.join(format!("{}_look.jpg", filename)))
        } else {
            // Use the specified path as-is
            Ok(out_path.clone())
        }
    } else {
        // Use input directory with modified filename
        let filename = input
            .file_stem()
            .ok_or("Invalid input filename")?
            .to_string_lossy();
        let parent = input.parent().unwrap_or(Path::new("."));
        Ok(parent.join(format!("{}_look.jpg", filename)))
    }
}

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files. If `recursive` is
/// true, subdirectories are also scanned.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_images_from_dir(input, recursive, &mut files)?;
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    // Sort for consistent ordering
    files.sort();
    Ok(files)
}

/// Recursively collect image files from a directory.
fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() && recursive {
            collect_images_from_dir(&path, recursive, files)?;
        } else if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                    files.push(path);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_defaults_next_to_input() {
        let path = determine_output_path(Path::new("/photos/sunset.png"), &None).unwrap();
        assert_eq!(path, PathBuf::from("/photos/sunset_look.jpg"));
    }

    #[test]
    fn test_explicit_file_path_used_as_is() {
        let out = Some(PathBuf::from("/tmp/styled.jpg"));
        let path = determine_output_path(Path::new("in.jpg"), &out).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/styled.jpg"));
    }

    #[test]
    fn test_missing_input_rejected_by_expand() {
        let result = expand_inputs(&[PathBuf::from("/no/such/file.jpg")], false);
        assert!(result.is_err());
    }
}
