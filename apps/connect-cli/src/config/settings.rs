//! Control plane client settings

use crate::config::ConfigPaths;
use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the REST host
pub const HOST_ENV: &str = "CONNECT_REST_HOST";
/// Environment variable overriding the REST port
pub const PORT_ENV: &str = "CONNECT_REST_PORT";

/// Settings used to reach and drive the control plane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL scheme of the REST listener
    pub scheme: String,
    /// REST listener host
    pub host: String,
    /// REST listener port
    pub port: u16,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Status code the control plane answers a successful DELETE with
    pub delete_success_code: u16,
    /// Maximum in-flight requests when targeting all connectors
    pub batch_concurrency: usize,
    /// Attempts allowed for a yes/no question before giving up
    pub max_prompt_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 8083,
            timeout_secs: 30,
            delete_success_code: 204,
            batch_concurrency: 4,
            max_prompt_attempts: 3,
        }
    }
}

impl Config {
    /// Load the config file if present, then apply environment overrides
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        let mut config = if paths.config_file.exists() {
            let content = std::fs::read_to_string(&paths.config_file)?;
            serde_json::from_str(&content).map_err(|e| {
                CliError::Config(format!(
                    "Invalid config file {}: {e}",
                    paths.config_file.display()
                ))
            })?
        } else {
            Config::default()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> CliResult<()> {
        if let Ok(host) = std::env::var(HOST_ENV) {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Ok(port) = std::env::var(PORT_ENV) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| CliError::Config(format!("{PORT_ENV} is not a valid port: {port}")))?;
        }
        Ok(())
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        concurrency: Option<usize>,
    ) -> CliResult<Self> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(concurrency) = concurrency {
            self.batch_concurrency = concurrency;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> CliResult<()> {
        if self.host.trim().is_empty() {
            return Err(CliError::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(CliError::Config("port must be non-zero".to_string()));
        }
        if self.batch_concurrency == 0 {
            return Err(CliError::Config(
                "batch_concurrency must be at least 1".to_string(),
            ));
        }
        if self.max_prompt_attempts == 0 {
            return Err(CliError::Config(
                "max_prompt_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL of the REST API, without trailing slash
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
