//! Error types for the Registry client
//!
//! These never cross the public client boundary: lookups degrade to empty
//! results by contract, and the typed variants exist so diagnostic logs
//! can tell "nothing exists" apart from "something is broken."

use thiserror::Error;

/// Errors arising from one Registry request
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Network failure (connect, DNS, timeout)
    #[error("Registry unreachable: {0}")]
    Unreachable(String),

    /// Non-success status code from the Registry
    #[error("Registry returned HTTP {status}")]
    UpstreamStatus {
        /// The status code received
        status: u16,
    },

    /// Body did not parse or lacked expected fields
    #[error("Malformed Registry response: {0}")]
    Malformed(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for RegistryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            RegistryError::Unreachable(e.to_string())
        } else if e.is_decode() {
            RegistryError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            RegistryError::UpstreamStatus {
                status: status.as_u16(),
            }
        } else {
            RegistryError::Unreachable(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Malformed(e.to_string())
    }
}
