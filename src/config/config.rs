// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::layout::{DEFAULT_PACKAGES_FOLDER, PackageLayout};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory of the hosting web application
    pub application_root: PathBuf,

    /// Folder under `<application_root>/bin` holding package zips and exploded packages
    pub packages_folder: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from TOML file with environment variable overrides
    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var("EXPLODER_CONFIG")
            .unwrap_or_else(|_| "exploder.toml".to_string());

        let mut config: Config = if std::path::Path::new(&config_path).exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)?
        } else {
            Config::default()
        };

        if let Ok(val) = std::env::var("EXPLODER_APPLICATION_ROOT") {
            config.application_root = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("EXPLODER_PACKAGES_FOLDER") {
            config.packages_folder = val;
        }
        if let Ok(val) = std::env::var("EXPLODER_LOG_LEVEL") {
            config.log_level = val;
        }

        Ok(config)
    }

    /// Path conventions for the configured packages folder
    pub fn layout(&self) -> PackageLayout {
        PackageLayout::new(self.packages_folder.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_root: PathBuf::from("."),
            packages_folder: String::from(DEFAULT_PACKAGES_FOLDER),
            log_level: String::from("info"),
        }
    }
}
