pub mod config;
pub mod extract;

use std::path::{Path, PathBuf};

use invex_core::InvexConfig;

/// `<config dir>/invex/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("invex")
        .join("config.json")
}

/// Load the explicit config file, else the default one if it exists, else defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<InvexConfig> {
    if let Some(path) = path {
        return Ok(InvexConfig::from_file(path)?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(InvexConfig::from_file(&default_path)?)
    } else {
        Ok(InvexConfig::default())
    }
}
