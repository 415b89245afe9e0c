use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-lookup.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-lookup/config.toml";

/// Main configuration structure for Ferrous Lookup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LookupConfig {
    /// Timeouts, retry policy and query ceiling
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LookupConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-lookup.toml in current directory
    /// 3. /etc/ferrous-lookup/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout_ms;
        }
        if let Some(port) = overrides.dns_port {
            self.resolver.dns_port = port;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.max_queries == 0 {
            return Err(ConfigError::Validation(
                "Query limit cannot be 0".to_string(),
            ));
        }

        if self.resolver.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.resolver.recv_buffer_size < 12 {
            return Err(ConfigError::Validation(format!(
                "Receive buffer of {} bytes cannot hold a DNS header",
                self.resolver.recv_buffer_size
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub timeout_ms: Option<u64>,
    pub dns_port: Option<u16>,
}
