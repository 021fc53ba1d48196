//! Configuration for the Ledger client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ledger endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";

/// Default timeout for Ledger requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`LedgerClient`](crate::LedgerClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Base URL of the Ledger service
    pub base_url: String,

    /// Maximum time for a single request (seconds)
    pub timeout_secs: u64,
}

impl LedgerConfig {
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

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
