//! Configuration File Loading
//!
//! Looks for `config.toml` (or `config.json`) in a fixed list of
//! directories and falls back to built-in defaults when none is found.

use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory name used in every search location
const APP_DIR: &str = "webterm";

/// Base file name of the configuration file
const CONFIG_FILE_STEM: &str = "config";

/// Environment variable pointing at an explicit configuration file
pub const CONFIG_ENV: &str = "WEBTERM_CONFIG";

/// Configuration file loader
pub struct ConfigLoader {
    /// Directories searched for a configuration file
    search_paths: Vec<PathBuf>,
    /// Path of the file that was loaded, if any
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    /// Pick the format from a file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            current_path: None,
        }
    }

    /// Load configuration from `WEBTERM_CONFIG`, the search paths, or defaults
    ///
    /// Environment overrides are applied and the result is validated.
    pub fn load() -> Result<Config> {
        let mut loader = Self::new();
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load_from_file(Path::new(&path))?,
            _ => match loader.find_and_load_config()? {
                Some((path, config)) => {
                    info!("Configuration loaded from {}", path.display());
                    loader.current_path = Some(path);
                    config
                }
                None => {
                    debug!("No configuration file found, using defaults");
                    Config::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a specific configuration file
    pub fn load_from_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "Configuration file does not exist".to_string(),
            });
        }

        let config = Self::parse_file(path, ConfigFormat::from_path(path))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path, format chosen by extension
    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                }
            })?,
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                    format: "TOML".to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for dir in &self.search_paths {
            for format in [ConfigFormat::Toml, ConfigFormat::Json] {
                let config_path = dir.join(CONFIG_FILE_STEM).with_extension(format.extension());

                if config_path.exists() {
                    match Self::parse_file(&config_path, format) {
                        Ok(config) => return Ok(Some((config_path, config))),
                        Err(e) => {
                            warn!(
                                "Failed to load config from {}: {}",
                                config_path.display(),
                                e
                            );
                            continue;
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    /// Parse one configuration file
    fn parse_file(path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_DIR));
        }

        // XDG config home fallback (for platforms that might set it)
        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join(APP_DIR));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{}", APP_DIR)));
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join(format!(".{}", APP_DIR)));
        }

        paths
    }

    /// Path of the file that was loaded, if any
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Directories searched for a configuration file
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
