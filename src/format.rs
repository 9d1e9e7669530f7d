//! Interchange (JSON) and config-file (YAML) encodings of [`ChannelConfig`].
use std::{fs, path::Path};

use crate::channel::ChannelConfig;
use crate::config_file::FileChannel;
use crate::error::{ChannelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension (`json`, `yaml`, `yml`; any case).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(ChannelError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn decode(self, text: &str) -> Result<ChannelConfig> {
        match self {
            ConfigFormat::Json => ChannelConfig::from_json(text),
            ConfigFormat::Yaml => ChannelConfig::from_yaml(text),
        }
    }

    pub fn encode(self, cfg: &ChannelConfig) -> Result<String> {
        match self {
            ConfigFormat::Json => cfg.to_json_pretty(),
            ConfigFormat::Yaml => cfg.to_yaml(),
        }
    }
}

impl ChannelConfig {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Config-file encoding; nested policy keys differ from the JSON ones.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&FileChannel::from(self))?)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str::<FileChannel>(text)?.into())
    }

    /// Reads and validates a channel config; the format follows the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let cfg = format.decode(&text)?;
        cfg.validate()?;
        tracing::info!(
            channel = %cfg.key,
            path = %path.display(),
            peers = cfg.peers.len(),
            orderers = cfg.orderers.len(),
            "loaded channel config"
        );
        Ok(cfg)
    }

    /// Writes the config as-is; no validation.
    pub fn save(&self, path: impl AsRef<Path>) -> Result {
        let path = path.as_ref();
        let text = ConfigFormat::from_path(path)?.encode(self)?;
        fs::write(path, text)?;
        tracing::debug!(channel = %self.key, path = %path.display(), "saved channel config");
        Ok(())
    }
}
