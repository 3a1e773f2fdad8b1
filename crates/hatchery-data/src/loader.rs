//! Format detection, deserialization and resolution of scheduler config files.
//!
//! A file is parsed into [`SchedulerConfigData`] according to its extension
//! (RON/JSON/TOML) and then resolved into a validated [`SchedulerConfig`].

use crate::schema::SchedulerConfigData;
use hatchery_core::body::BodyPlan;
use hatchery_core::config::{ConfigError, SchedulerConfig};
use hatchery_core::fixed::f64_to_fixed64;
use log::debug;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The file parsed but its values are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Deserialize `content` in the given format. `origin` is only used in
/// error messages.
pub fn deserialize_str<T: DeserializeOwned>(
    content: &str,
    format: Format,
    origin: &Path,
) -> Result<T, DataLoadError> {
    let parse_err = |detail: String| DataLoadError::Parse {
        file: origin.to_path_buf(),
        detail,
    };
    match format {
        Format::Ron => ron::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
    }
}

/// Read a file and deserialize it according to its format (detected from extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    deserialize_str(&content, format, path)
}

// ===========================================================================
// Resolution
// ===========================================================================

/// Turn parsed data into a validated [`SchedulerConfig`].
pub fn resolve_config(
    data: SchedulerConfigData,
    origin: &Path,
) -> Result<SchedulerConfig, DataLoadError> {
    if !data.body.fill_factor.is_finite() {
        return Err(DataLoadError::Parse {
            file: origin.to_path_buf(),
            detail: format!("fill_factor must be a finite number, got {}", data.body.fill_factor),
        });
    }
    let priority = data
        .body
        .priority
        .into_iter()
        .map(|entry| (entry.part, entry.weight))
        .collect();
    let plan = BodyPlan::new(priority, f64_to_fixed64(data.body.fill_factor))?;
    let config = SchedulerConfig::new(data.max_queue, data.marker, data.name_prefix, plan)?;
    debug!(
        "loaded scheduler config from {}: max_queue={} marker={}",
        origin.display(),
        config.max_queue(),
        config.marker()
    );
    Ok(config)
}

// ===========================================================================
// Tests
// ===========================================================================
