//! Global integrity prober

use heirloom_domain::{IntegritySource, LedgerStatus};

/// Exposes the Ledger's own global integrity check as a system-wide
/// health signal, distinct from any one asset's chain state.
///
/// No algorithm of its own: the failure-closed default (`valid: false`
/// when the endpoint is unreachable) is the source's contract.
pub struct IntegrityProber<S: IntegritySource> {
    source: S,
}

impl<S: IntegritySource> IntegrityProber<S> {
    /// Create a prober over the given integrity source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The Ledger's current global integrity status.
    pub async fn probe(&self) -> LedgerStatus {
        self.source.global_integrity().await
    }
}
