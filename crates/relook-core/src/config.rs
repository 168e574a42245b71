//! Engine tuning constants and verbose output control.
//!
//! Tuning values ship with defaults matched to broad photographic content
//! and can be overridden from a YAML file. Lookup order:
//! 1. An explicit path passed by the caller
//! 2. `RELOOK_CONFIG` environment variable
//! 3. `relook.yml` / `relook.yaml` in the current directory
//! 4. `relook.yml` / `relook.yaml` in `~/relook/`

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Global verbose output flag.
pub static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable verbose output globally.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print to stderr only when verbose output is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

fn default_brightness_reference() -> f32 {
    128.0
}

fn default_contrast_reference() -> f32 {
    50.0
}

fn default_saturation_reference() -> f32 {
    127.0
}

fn default_sharpness_reference() -> f32 {
    15.0
}

fn default_shadow_reference() -> f32 {
    60.0
}

fn default_highlight_reference() -> f32 {
    200.0
}

fn default_shadow_threshold() -> f32 {
    85.0
}

fn default_highlight_threshold() -> f32 {
    170.0
}

fn default_temperature_scale() -> f32 {
    300.0
}

fn default_significance_threshold() -> f32 {
    5.0
}

fn default_max_confidence() -> f32 {
    0.95
}

fn default_max_suggestions() -> usize {
    3
}

fn default_synthesis_shadow_cutoff() -> f32 {
    0.3
}

fn default_synthesis_highlight_cutoff() -> f32 {
    0.7
}

fn default_jpeg_quality() -> u8 {
    85
}

/// Reference values and thresholds driving analysis and synthesis.
///
/// References are the "neutral look" statistics deviations are measured
/// against, on the 0-255 luma scale where applicable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTuning {
    /// Neutral mean luma.
    pub brightness_reference: f32,
    /// Neutral luma standard deviation.
    pub contrast_reference: f32,
    /// Neutral mean HSV saturation on the 0-255 scale.
    pub saturation_reference: f32,
    /// Neutral mean gradient magnitude.
    pub sharpness_reference: f32,
    /// Neutral mean luma of the shadow region.
    pub shadow_reference: f32,
    /// Neutral mean luma of the highlight region.
    pub highlight_reference: f32,
    /// Luma below this belongs to the shadow region.
    pub shadow_threshold: f32,
    /// Luma above this belongs to the highlight region.
    pub highlight_threshold: f32,
    /// Kelvin per unit of (R-B)/(R+B) channel imbalance.
    pub temperature_scale: f32,
    /// Minimum percent deviation counted as significant.
    pub significance_threshold: f32,
    /// Upper bound on the aggregate confidence score.
    pub max_confidence: f32,
    /// Maximum number of suggestions in a report.
    pub max_suggestions: usize,
    /// Synthesis shadow mask cutoff on 0.0-1.0 luma.
    pub synthesis_shadow_cutoff: f32,
    /// Synthesis highlight mask cutoff on 0.0-1.0 luma.
    pub synthesis_highlight_cutoff: f32,
    /// Quality used when exporting JPEG output.
    pub jpeg_quality: u8,
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            brightness_reference: default_brightness_reference(),
            contrast_reference: default_contrast_reference(),
            saturation_reference: default_saturation_reference(),
            sharpness_reference: default_sharpness_reference(),
            shadow_reference: default_shadow_reference(),
            highlight_reference: default_highlight_reference(),
            shadow_threshold: default_shadow_threshold(),
            highlight_threshold: default_highlight_threshold(),
            temperature_scale: default_temperature_scale(),
            significance_threshold: default_significance_threshold(),
            max_confidence: default_max_confidence(),
            max_suggestions: default_max_suggestions(),
            synthesis_shadow_cutoff: default_synthesis_shadow_cutoff(),
            synthesis_highlight_cutoff: default_synthesis_highlight_cutoff(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

/// A loaded tuning plus where it came from, for diagnostics.
#[derive(Debug, Clone)]
pub struct TuningHandle {
    pub tuning: EngineTuning,
    /// None means built-in defaults.
    pub source: Option<PathBuf>,
}

impl TuningHandle {
    /// Print where the tuning came from when verbose output is on.
    pub fn log_usage(&self) {
        match &self.source {
            Some(path) => verbose_println!("Using tuning file: {}", path.display()),
            None => verbose_println!("Using built-in tuning defaults"),
        }
    }
}

fn candidate_paths(explicit: Option<&PathBuf>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = explicit {
        candidates.push(path.clone());
    }

    if let Ok(env_path) = std::env::var("RELOOK_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    candidates.push(PathBuf::from("relook.yml"));
    candidates.push(PathBuf::from("relook.yaml"));

    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join("relook").join("relook.yml"));
        candidates.push(home.join("relook").join("relook.yaml"));
    }

    candidates
}

/// Load tuning from the first candidate file that exists.
///
/// A missing file falls through to the next candidate; a file that exists
/// but fails to parse is an error rather than a silent fallback.
pub fn load_tuning(explicit: Option<&PathBuf>) -> Result<TuningHandle, String> {
    for path in candidate_paths(explicit) {
        if !path.is_file() {
            continue;
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read tuning file {}: {}", path.display(), e))?;
        let tuning: EngineTuning = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse tuning file {}: {}", path.display(), e))?;

        return Ok(TuningHandle {
            tuning,
            source: Some(path),
        });
    }

    Ok(TuningHandle {
        tuning: EngineTuning::default(),
        source: None,
    })
}

static TUNING: OnceLock<TuningHandle> = OnceLock::new();

/// Process-wide tuning handle, loaded once from the default candidates.
///
/// A parse failure falls back to defaults here; callers that need the
/// error should use [`load_tuning`] directly.
pub fn tuning_handle() -> &'static TuningHandle {
    TUNING.get_or_init(|| {
        load_tuning(None).unwrap_or_else(|e| {
            eprintln!("Warning: {}", e);
            TuningHandle {
                tuning: EngineTuning::default(),
                source: None,
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_values() {
        let tuning = EngineTuning::default();
        assert_eq!(tuning.brightness_reference, 128.0);
        assert_eq!(tuning.contrast_reference, 50.0);
        assert_eq!(tuning.significance_threshold, 5.0);
        assert_eq!(tuning.max_confidence, 0.95);
        assert_eq!(tuning.jpeg_quality, 85);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let tuning: EngineTuning =
            serde_yaml::from_str("significance_threshold: 8.0\nmax_suggestions: 5\n").unwrap();
        assert_eq!(tuning.significance_threshold, 8.0);
        assert_eq!(tuning.max_suggestions, 5);
        assert_eq!(tuning.brightness_reference, 128.0);
        assert_eq!(tuning.temperature_scale, 300.0);
    }

    #[test]
    fn test_shadow_cutoff_below_highlight_cutoff() {
        let tuning = EngineTuning::default();
        assert!(tuning.synthesis_shadow_cutoff < tuning.synthesis_highlight_cutoff);
        assert!(tuning.shadow_threshold < tuning.highlight_threshold);
    }
}
