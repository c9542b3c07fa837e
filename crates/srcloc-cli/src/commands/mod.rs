pub mod classify;
pub mod contains;

use anyhow::{Context, Result};
use srcloc_config::{find_config, load_config, SourceConfig};
use std::path::{Path, PathBuf};

/// Load the config named on the command line, or the nearest one above
/// `start_dir`, falling back to the defaults when there is none.
fn resolve_config(config_path: Option<PathBuf>, start_dir: &Path) -> Result<SourceConfig> {
    let config_path = match config_path {
        Some(path) => path,
        None => {
            let start_dir = start_dir
                .canonicalize()
                .with_context(|| format!("Failed to resolve {}", start_dir.display()))?;
            match find_config(&start_dir) {
                Some(path) => path,
                None => {
                    tracing::info!("no config file found, using defaults");
                    return Ok(SourceConfig::default());
                }
            }
        }
    };

    tracing::info!(path = %config_path.display(), "loading config");
    load_config(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))
}
