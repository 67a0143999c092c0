use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "release-util.toml";

/// Represents the complete configuration for release-util.
///
/// The repository root is resolved once here and handed to every component that
/// reads project files, instead of being derived from where the binary lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_repo_root")]
    pub repo_root: PathBuf,

    /// Properties file holding `version.base`, relative to `repo_root`
    #[serde(default = "default_build_properties")]
    pub build_properties: String,

    #[serde(default)]
    pub download: DownloadConfig,
}

fn default_repo_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_build_properties() -> String {
    "build-options.properties".to_string()
}

fn default_chunk_size() -> usize {
    65536
}

fn default_user_agent() -> String {
    format!("release-util/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings for artifact downloads.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DownloadConfig {
    /// Bytes per read/write cycle while streaming
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        DownloadConfig {
            chunk_size: default_chunk_size(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repo_root: default_repo_root(),
            build_properties: default_build_properties(),
            download: DownloadConfig::default(),
        }
    }
}

impl Config {
    /// Configuration rooted at an explicit repository checkout
    pub fn for_repo(repo_root: impl Into<PathBuf>) -> Self {
        Config {
            repo_root: repo_root.into(),
            ..Config::default()
        }
    }

    /// Absolute or cwd-relative path of the build properties file
    pub fn build_properties_path(&self) -> PathBuf {
        self.repo_root.join(&self.build_properties)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-util.toml` in current directory
/// 3. `~/.config/.release-util.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed, or has a zero chunk size
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text).map_err(|e| ReleaseError::config(e.to_string()))?;

    if config.download.chunk_size == 0 {
        return Err(ReleaseError::config("download.chunk_size must be positive"));
    }

    Ok(config)
}
