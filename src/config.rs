use serde::{Deserialize, Serialize};
use anyhow::Result;

use crate::engine::config::{EngineConfig, DEFAULT_PROGRESS_STEP};
use crate::format::constants::DEFAULT_EXTENSION;

pub const DEFAULT_CONFIG_FILE: &str = "huffpack.toml";
pub const DEFAULT_LOG_FILTER: &str = "huffpack=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuffpackConfig {
    /// Extension appended to compressed files
    pub extension: String,
    pub progress_step: u8,
    pub log_filter: String,
    pub show_progress: bool,
}

impl Default for HuffpackConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            progress_step: DEFAULT_PROGRESS_STEP,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            show_progress: true,
        }
    }
}

impl HuffpackConfig {
    /// Read the config file if it exists, otherwise fall back to defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config_file = config_path.unwrap_or(DEFAULT_CONFIG_FILE);

        if std::path::Path::new(config_file).exists() {
            let content = std::fs::read_to_string(config_file)?;
            let config: HuffpackConfig = toml::from_str(&content)?;
            Ok(config)
        } else if config_path.is_some() {
            anyhow::bail!("config file not found: {}", config_file)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn engine(&self) -> EngineConfig {
        EngineConfig::with_progress_step(self.progress_step)
    }
}
