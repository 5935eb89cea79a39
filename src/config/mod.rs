//! Configuration module for article-search
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;

/// Load settings from the first file found, or use defaults.
///
/// `ARTICLE_SEARCH_SETTINGS_PATH` is checked before the default
/// locations. Environment overrides are applied last. Returns the file
/// the settings came from, if any.
pub fn load() -> Result<(Settings, Option<PathBuf>)> {
    let source = candidate_paths().into_iter().find(|path| path.exists());

    let mut settings = match &source {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    Ok((settings, source))
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(path) = std::env::var(format!("{}_SETTINGS_PATH", ENV_PREFIX)) {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from("settings.yml"));
    paths.push(PathBuf::from("config/settings.yml"));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("article-search/settings.yml"));
    }
    paths
}
