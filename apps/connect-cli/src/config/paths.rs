//! Platform-specific configuration paths

use crate::error::{CliError, CliResult};
use std::path::PathBuf;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "CONNECT_CLI_CONFIG_DIR";

/// Configuration paths for connect-cli
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Base configuration directory
    pub config_dir: PathBuf,
    /// Path to config.json
    pub config_file: PathBuf,
}

impl ConfigPaths {
    /// Get configuration paths for the current platform
    ///
    /// Paths:
    /// - Linux: ~/.config/connect-cli/
    /// - macOS: ~/Library/Application Support/connect-cli/
    /// - Windows: %APPDATA%\connect-cli\
    pub fn new() -> CliResult<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self::in_dir(config_dir))
    }

    /// Build paths rooted at an explicit directory
    pub fn in_dir(config_dir: PathBuf) -> Self {
        Self {
            config_file: config_dir.join("config.json"),
            config_dir,
        }
    }

    fn get_config_dir() -> CliResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let base_dir = dirs::config_dir().ok_or_else(|| {
            CliError::Config("Could not determine configuration directory".to_string())
        })?;

        Ok(base_dir.join("connect-cli"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths_in_dir() {
        let paths = ConfigPaths::in_dir(PathBuf::from("/tmp/connect-cli-test"));
        assert_eq!(paths.config_dir, PathBuf::from("/tmp/connect-cli-test"));
        assert!(paths.config_file.ends_with("config.json"));
    }

    #[test]
    fn test_config_paths_new() {
        if dirs::config_dir().is_some() || std::env::var(CONFIG_DIR_ENV).is_ok() {
            let paths = ConfigPaths::new().unwrap();
            assert!(paths.config_file.ends_with("config.json"));
        }
    }
}
