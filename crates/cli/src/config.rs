use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tradecmp_core::DEFAULT_BASE_URL;

pub const DEFAULT_CONFIG_PATH: &str = "tradecmp.toml";
pub const BASE_URL_ENV: &str = "TRADECMP_BASE_URL";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub folders: FolderConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Default folders used when a command is not given one.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FolderConfig {
    pub agreements: Option<String>,
    pub term_sheets: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub agreements_folder: Option<String>,
    pub term_sheets_folder: Option<String>,
}

/// Settings a single invocation runs with, after overrides are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub agreements_folder: String,
    pub term_sheets_folder: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse toml at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(config)
}

/// An explicit path must exist; the default path is optional.
pub fn load_config_or_default(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => Ok(AppConfig::default()),
    }
}

/// Missing folders resolve to an empty path, which the workflow rejects with
/// its own validation message.
pub fn resolve_settings(config: &AppConfig, overrides: Overrides) -> Settings {
    let base_url = overrides
        .base_url
        .unwrap_or_else(|| config.service.base_url.clone());
    let agreements_folder = overrides
        .agreements_folder
        .or_else(|| config.folders.agreements.clone())
        .unwrap_or_default();
    let term_sheets_folder = overrides
        .term_sheets_folder
        .or_else(|| config.folders.term_sheets.clone())
        .unwrap_or_default();

    Settings {
        base_url,
        agreements_folder,
        term_sheets_folder,
    }
}
