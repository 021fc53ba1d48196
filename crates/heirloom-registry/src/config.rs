//! Configuration for the Registry client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Registry endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Default timeout for Registry requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`RegistryClient`](crate::RegistryClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base URL of the Registry service
    pub base_url: String,

    /// Maximum time for a single request (seconds)
    pub timeout_secs: u64,
}

impl RegistryConfig {
    /// Create a configuration for the given endpoint with default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RegistryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_base_url_is_invalid() {
        let config = RegistryConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let mut config = RegistryConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RegistryConfig::new("http://registry.internal:9000");
        let toml_str = config.to_toml().unwrap();
        let parsed = RegistryConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.base_url, parsed.base_url);
        assert_eq!(config.timeout_secs, parsed.timeout_secs);
    }
}
