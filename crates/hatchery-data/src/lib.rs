//! Scheduler configuration files.
//!
//! Loads a [`hatchery_core::config::SchedulerConfig`] from a `.ron`, `.toml`
//! or `.json` file. The format is chosen by extension and every field may be
//! omitted in favor of its default.

pub mod loader;
pub mod schema;

pub use loader::{DataLoadError, Format};

use hatchery_core::config::SchedulerConfig;
use std::path::Path;

/// Load and validate a scheduler configuration file.
pub fn load_scheduler_config(path: &Path) -> Result<SchedulerConfig, DataLoadError> {
    let data = loader::deserialize_file(path)?;
    loader::resolve_config(data, path)
}

/// Parse and validate configuration text already in memory.
pub fn parse_scheduler_config(
    content: &str,
    format: Format,
) -> Result<SchedulerConfig, DataLoadError> {
    let origin = Path::new("<inline>");
    let data = loader::deserialize_str(content, format, origin)?;
    loader::resolve_config(data, origin)
}
