use crate::config::Config;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

pub const VERSION_BASE_KEY: &str = "version.base";

/// Read `version.base` from the build properties file of the configured checkout
pub fn find_current_version(config: &Config) -> Result<String> {
    read_version_base(&config.build_properties_path())
}

/// Read the trimmed `version.base` value from a properties file
pub fn read_version_base(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    let re = Regex::new(r"version\.base=(.*)")?;

    re.captures(&text)
        .map(|caps| caps[1].trim().to_string())
        .ok_or_else(|| ReleaseError::MissingProperty {
            key: VERSION_BASE_KEY.to_string(),
            file: path.display().to_string(),
        })
}
