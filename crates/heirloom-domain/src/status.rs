//! Global Ledger integrity status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of the Ledger's own global integrity check.
///
/// This is a coarse system-wide signal, distinct from any one asset's
/// chain state (see [`crate::timeline::ChainIntegrity`] for the latter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerStatus {
    /// Whether the Ledger reports its full log as intact
    pub valid: bool,

    /// Total number of entries covered by the check
    pub total_entries: u64,

    /// When the Ledger last ran its verification
    pub last_verified: DateTime<Utc>,
}

impl LedgerStatus {
    /// Conservative default for when the integrity endpoint cannot be
    /// reached or returns garbage. An unreachable integrity service must
    /// never be reported as valid.
    pub fn failure_closed() -> Self {
        Self {
            valid: false,
            total_entries: 0,
            last_verified: Utc::now(),
        }
    }
}
