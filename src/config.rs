use std::fs;
use std::path::PathBuf;

use dirs_next as dirs;
use serde::Deserialize;

use crate::error::AppError;

/// Scanner program used when nothing else is configured.
pub const DEFAULT_TOOL: &str = "veritensor";

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_ENV: &str = "VERITENSOR_ACTION_CONFIG";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tool: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let Some(path) = config_file_path() else {
            tracing::debug!("no configuration directory, using defaults");
            return Ok(Config::default());
        };
        if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|err| {
                AppError::config(format!("cannot read {}: {err}", path.display()))
            })?;
            let config: Config = toml::from_str(&contents)?;
            tracing::debug!(path = %path.display(), "loaded configuration");
            Ok(config)
        } else if std::env::var_os(CONFIG_ENV).is_some() {
            Err(AppError::config(format!("{CONFIG_ENV} points at missing file {}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Pick the scanner program: explicit override, then the file, then the
    /// built-in default.
    pub fn resolve_tool(&self, explicit: Option<&str>) -> Result<String, AppError> {
        let tool = explicit.or(self.tool.as_deref()).unwrap_or(DEFAULT_TOOL);
        if tool.trim().is_empty() {
            return Err(AppError::config("scanner program must not be empty"));
        }
        Ok(tool.to_string())
    }
}

pub fn config_file_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    let config_root =
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from).or_else(dirs::config_dir)?;
    Some(config_root.join("veritensor-action").join("config.toml"))
}
