// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration module for Huaolelo.
//!
//! Settings are layered from built-in defaults, an optional file (TOML, YAML,
//! JSON) and environment variable overrides. All values are validated before
//! use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

pub mod trie;
pub mod word_list;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "HUAOLELO";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Huaolelo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuaoleloConfig {
    /// Trie configuration
    pub trie: trie::TrieSettings,

    /// Word list configuration
    pub word_list: word_list::WordListSettings,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for HuaoleloConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.word_list.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Huaolelo.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(HuaoleloConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<HuaoleloConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&HuaoleloConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let loaded: HuaoleloConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        loaded.validate()?;
        tracing::debug!(?loaded, "Configuration loaded");

        Ok(loaded)
    }
}

/// Serializes `config` as pretty-printed TOML.
pub fn to_toml_string(config: &HuaoleloConfig) -> ConfigResult<String> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<HuaoleloConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    pub fn new(config: HuaoleloConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &HuaoleloConfig {
        &self.config
    }
}

static GLOBAL_CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

/// Initialize the global configuration.
///
/// Only the first call takes effect.
pub fn init_global_config(config: HuaoleloConfig) {
    if GLOBAL_CONFIG.set(GlobalConfig::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration, falling back to defaults when it was
/// never initialized.
pub fn get_global_config() -> GlobalConfig {
    GLOBAL_CONFIG
        .get_or_init(|| GlobalConfig::new(HuaoleloConfig::default()))
        .clone()
}
