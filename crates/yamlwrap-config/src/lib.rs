use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "YAMLWRAP_CONFIG";

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

    #[error("Invalid width in config file at {config_path}: must be at least 1")]
    InvalidWidth { config_path: PathBuf },

    #[error(
        "Config file at {config_path} sets both selection.include and selection.exclude; use one"
    )]
    ConflictingSelection { config_path: PathBuf },
}

/// Which top-level keys are eligible for wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Target line width. The engine's default applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Log paragraphs longer than this many characters. Off when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_paragraph_threshold: Option<usize>,
    pub selection: SelectionConfig,
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

    /// `$YAMLWRAP_CONFIG` (shell-expanded) if set, else
    /// `~/.config/yamlwrap/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Ok(custom) = std::env::var(CONFIG_ENV_VAR)
            && !custom.is_empty()
        {
            return Self::expand_path(Path::new(&custom)).unwrap_or_else(|| PathBuf::from(custom));
        }
        let config_dir = shellexpand::tilde("~/.config/yamlwrap");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        if self.width == Some(0) {
            return Err(ConfigError::InvalidWidth {
                config_path: config_path.to_path_buf(),
            });
        }
        if !self.selection.include.is_empty() && !self.selection.exclude.is_empty() {
            return Err(ConfigError::ConflictingSelection {
                config_path: config_path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
