//! Error types for the Ledger client
//!
//! As with the Registry client, these stay internal: public lookups
//! degrade to empty results, and the variants exist for diagnostic logs.

use thiserror::Error;

/// Errors arising from one Ledger request
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Network failure (connect, DNS, timeout)
    #[error("Ledger unreachable: {0}")]
    Unreachable(String),

    /// Non-success status code from the Ledger
    #[error("Ledger returned HTTP {status}")]
    UpstreamStatus {
        /// The status code received
        status: u16,
    },

    /// Body matched neither the documented nor the legacy shape
    #[error("Malformed Ledger response: {0}")]
    Malformed(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for LedgerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            LedgerError::Unreachable(e.to_string())
        } else if e.is_decode() {
            LedgerError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            LedgerError::UpstreamStatus {
                status: status.as_u16(),
            }
        } else {
            LedgerError::Unreachable(e.to_string())
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        LedgerError::Malformed(e.to_string())
    }
}
