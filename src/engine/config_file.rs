use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "scaffold";

/// Represents the structure of the `default-config.toml` file.
/// All fields are optional, so users only need to specify what they want to override.
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub template_dir: Option<PathBuf>,
    pub install_command: Option<String>,
}

impl ConfigFile {
    /// Reads the user config file if there is one. A missing file (or no
    /// config directory at all) yields the defaults; nothing is created.
    pub fn load() -> Result<Self> {
        let path = match confy::get_configuration_file_path(APP_NAME, None) {
            Ok(p) => p,
            Err(_e) => {
                #[cfg(feature = "logging")]
                log::warn!("No config directory available, using defaults: {_e}");
                return Ok(Self::default());
            }
        };
        if !path.is_file() {
            return Ok(Self::default());
        }
        #[cfg(feature = "logging")]
        log::debug!("Loading config from {}", path.display());
        confy::load_path(&path)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }
}
