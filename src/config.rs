use crate::error::{Result, VermanError};
use crate::store::DEFAULT_VERSION_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for verman.
///
/// Carries the project identity, the version file location, and runtime
/// options consumed by packaging.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default)]
    pub run: RunConfig,
}

/// Project identity used for manifest attributes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    #[serde(default = "default_project_name")]
    pub name: String,
}

/// Runtime options forwarded to the packaged application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RunConfig {
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_project_name() -> String {
    "project".to_string()
}

fn default_version_file() -> String {
    DEFAULT_VERSION_FILE.to_string()
}

fn default_profile() -> String {
    "prod".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            name: default_project_name(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            profile: default_profile(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project: ProjectConfig::default(),
            version_file: default_version_file(),
            run: RunConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `verman.toml` in current directory
/// 3. `.verman.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| VermanError::config(format!("cannot read '{}': {}", path, e)))?
    } else if Path::new("./verman.toml").exists() {
        fs::read_to_string("./verman.toml")
            .map_err(|e| VermanError::config(format!("cannot read './verman.toml': {}", e)))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".verman.toml");
        if config_path.exists() {
            fs::read_to_string(&config_path).map_err(|e| {
                VermanError::config(format!("cannot read '{}': {}", config_path.display(), e))
            })?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| VermanError::config(e.to_string()))
}
