// Configuration module for appforge
// This module handles loading and parsing configuration from ~/.config/appforge/config.toml

mod types;

pub use types::{AppearanceConfig, Config, NotificationConfig, ProgressConfig, RestartPolicy};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppForgeError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/appforge/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_or_default(&get_config_path())
}

fn load_config_or_default(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(message) => {
            log::error!("Rejected config file {:?}: {}", config_path, message);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", message)),
            }
        }
    }
}

/// Loads a config file the user named explicitly.
///
/// Unlike [`load_config`], problems are errors: a path passed on the command
/// line that cannot be used should stop startup.
pub fn load_config_from(path: &Path) -> Result<Config, AppForgeError> {
    if !path.exists() {
        return Err(AppForgeError::ConfigNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    parse_config(&contents).map_err(AppForgeError::InvalidConfig)
}

fn parse_config(contents: &str) -> Result<Config, String> {
    let config = toml::from_str::<Config>(contents).map_err(|e| e.to_string())?;
    config.validate()?;
    log::debug!(
        "Config parsed: restart_policy={:?} seed={:?}",
        config.progress.restart_policy,
        config.progress.seed
    );
    Ok(config)
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/appforge/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("appforge")
        .join("config.toml")
}
