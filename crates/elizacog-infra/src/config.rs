//! Configuration file loader for ElizaCog.
//!
//! Locates and reads `elizacog.yaml` in the base directory. These are the
//! entry points for commands that start from an existing configuration;
//! writing goes through [`ConfigStore::save`].

use std::path::{Path, PathBuf};

use elizacog_core::config::ConfigStore;
use elizacog_types::config::CONFIG_FILE_NAME;
use elizacog_types::error::ConfigError;

/// `{base_dir}/elizacog.yaml`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE_NAME)
}

/// Whether `base_dir` has been initialized (holds a configuration file).
pub fn is_initialized_dir(base_dir: &Path) -> bool {
    config_path(base_dir).is_file()
}

/// Load a configuration file. The parsed document replaces all defaults.
pub fn load_config(path: &Path) -> Result<ConfigStore, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let store = ConfigStore::from_yaml_str(&content)?;
    tracing::debug!(path = %path.display(), "Loaded configuration");
    Ok(store)
}
