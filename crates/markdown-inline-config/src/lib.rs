use markdown_inline_engine::{InlineError, PipelineOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides [`Config::config_path`].
pub const CONFIG_PATH_ENV: &str = "MARKDOWN_INLINE_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "~/.config/markdown-inline/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid pipeline in config file at {config_path}: {source}")]
    InvalidPipeline {
        config_path: PathBuf,
        source: InlineError,
    },

    #[error("Config file at {config_path} sets an empty paragraph_tag")]
    EmptyParagraphTag { config_path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tag wrapping each rendered paragraph.
    pub paragraph_tag: String,
    pub pipeline: PipelineOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paragraph_tag: "p".to_string(),
            pipeline: PipelineOptions::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.validate(config_path)?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$MARKDOWN_INLINE_CONFIG` if set, else `~/.config/markdown-inline/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::resolve_config_path(std::env::var(CONFIG_PATH_ENV).ok().as_deref())
    }

    fn resolve_config_path(override_path: Option<&str>) -> PathBuf {
        let raw = override_path
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_CONFIG_PATH);
        match shellexpand::full(raw) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
        }
    }

    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        if self.paragraph_tag.is_empty() {
            return Err(ConfigError::EmptyParagraphTag {
                config_path: config_path.to_path_buf(),
            });
        }
        self.pipeline
            .validate()
            .map_err(|source| ConfigError::InvalidPipeline {
                config_path: config_path.to_path_buf(),
                source,
            })
    }
}
