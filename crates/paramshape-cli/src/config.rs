//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Environment variables
//! - Command-line arguments

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local configuration file written by `config init`
pub const PROJECT_CONFIG_FILE: &str = ".paramshape.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, json-pretty, yaml)
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,

    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            file: None,
        }
    }
}

/// Serialization format of a configuration file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match FileFormat::from_path(path) {
            FileFormat::Toml => toml::from_str(&content)?,
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// The first existing user file is the base layer and the first
    /// existing project file is merged over it.
    pub fn load() -> Result<Self> {
        let user = Self::first_existing(&Self::user_config_paths());
        let project = Self::first_existing(&Self::project_config_paths());
        Ok(Self::load_layers(user.as_deref(), project.as_deref()))
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Merge a project file over a user file; unreadable layers are skipped
    pub fn load_layers(user: Option<&Path>, project: Option<&Path>) -> Self {
        let mut config = Self::default();

        for path in [user, project].into_iter().flatten() {
            match Self::from_file(path) {
                Ok(layer) => config.merge(layer),
                Err(e) => {
                    eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                }
            }
        }

        config
    }

    fn first_existing(paths: &[PathBuf]) -> Option<PathBuf> {
        paths.iter().find(|path| path.exists()).cloned()
    }

    /// Project configuration files in the current directory, in priority order
    pub fn project_config_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from(PROJECT_CONFIG_FILE),
            PathBuf::from(".paramshape.yaml"),
            PathBuf::from(".paramshape.json"),
        ]
    }

    /// User configuration files, in priority order
    pub fn user_config_paths() -> Vec<PathBuf> {
        dirs::config_dir()
            .map(|config_dir| {
                let paramshape_dir = config_dir.join("paramshape");
                vec![
                    paramshape_dir.join("config.toml"),
                    paramshape_dir.join("config.yaml"),
                    paramshape_dir.join("config.json"),
                ]
            })
            .unwrap_or_default()
    }

    /// Every configuration file path that is searched, project files first
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Self::project_config_paths();
        paths.extend(Self::user_config_paths());
        paths
    }

    /// Merge with another config
    ///
    /// Fields of `other` that differ from the built-in defaults take
    /// precedence; fields left at their default keep the current value.
    pub fn merge(&mut self, other: Config) {
        let defaults = Config::default();

        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.color != defaults.output.color {
            self.output.color = other.output.color;
        }
        if other.logging.level != defaults.logging.level {
            self.logging.level = other.logging.level;
        }
        if other.logging.format != defaults.logging.format {
            self.logging.format = other.logging.format;
        }
        if other.logging.file.is_some() {
            self.logging.file = other.logging.file;
        }
    }

    /// Render the configuration as text in the given format
    pub fn render(&self, format: crate::cli::ConfigFormat) -> Result<String> {
        use crate::cli::ConfigFormat;

        Ok(match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileFormat::from_path(path) {
            FileFormat::Toml => toml::to_string_pretty(self)?,
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content).map_err(|e| {
            Error::config(format!("cannot write {}: {}", path.display(), e))
        })
    }
}
