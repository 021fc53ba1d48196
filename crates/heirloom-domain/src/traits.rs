//! Trait seams between domain logic and infrastructure
//!
//! The HTTP adapters in `heirloom-ledger` implement these; tests and the
//! host application can substitute in-memory fakes without touching any
//! global state.
//!
//! Note the return types: implementations degrade every failure class to
//! an empty result at this boundary (logging the real cause), so callers
//! never see transport errors. Absence of data is a normal outcome here,
//! not a failure.

use crate::event::ProvenanceEvent;
use crate::status::LedgerStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filter criteria for arbitrary event queries against the Ledger.
///
/// Every field is optional; absent fields are omitted from the upstream
/// request entirely (no null or empty-string parameters).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Filter by originating app or service
    pub source: Option<String>,

    /// Filter by event type
    pub event_type: Option<String>,

    /// Filter by asset PAID
    pub asset_id: Option<String>,

    /// Filter by anchor grouping key
    pub anchor_id: Option<String>,

    /// Filter by the actor that caused the event
    pub actor_id: Option<String>,

    /// Only events created at or after this instant
    pub from: Option<DateTime<Utc>>,

    /// Only events created at or before this instant
    pub until: Option<DateTime<Utc>>,

    /// Maximum number of events to return
    pub limit: Option<u32>,
}

impl EventFilter {
    /// Whether no criteria are set at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Read-only access to the Ledger's provenance events.
///
/// Implemented by `heirloom-ledger`'s HTTP client. Implementations return
/// events in upstream order; sorting is the timeline builder's job.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// All events recorded for one asset.
    async fn events_for_asset(&self, asset_id: &str) -> Vec<ProvenanceEvent>;

    /// All events recorded under one anchor.
    async fn events_for_anchor(&self, anchor_id: &str) -> Vec<ProvenanceEvent>;

    /// Events matching an arbitrary filter set.
    async fn query_events(&self, filter: &EventFilter) -> Vec<ProvenanceEvent>;
}

/// Access to the Ledger's global integrity check.
///
/// Distinct from per-asset chain walking: this is the Ledger's own
/// system-wide verdict over its full log.
#[async_trait]
pub trait IntegritySource: Send + Sync {
    /// The Ledger's global integrity status. Implementations must return
    /// [`LedgerStatus::failure_closed`] when the endpoint cannot be
    /// reached or its response cannot be parsed.
    async fn global_integrity(&self) -> LedgerStatus;
}

// Shared client instances are the normal case: one Ledger client backs
// both the timeline builder and the integrity prober.
#[async_trait]
impl<T: EventSource + ?Sized> EventSource for std::sync::Arc<T> {
    async fn events_for_asset(&self, asset_id: &str) -> Vec<ProvenanceEvent> {
        (**self).events_for_asset(asset_id).await
    }

    async fn events_for_anchor(&self, anchor_id: &str) -> Vec<ProvenanceEvent> {
        (**self).events_for_anchor(anchor_id).await
    }

    async fn query_events(&self, filter: &EventFilter) -> Vec<ProvenanceEvent> {
        (**self).query_events(filter).await
    }
}

#[async_trait]
impl<T: IntegritySource + ?Sized> IntegritySource for std::sync::Arc<T> {
    async fn global_integrity(&self) -> LedgerStatus {
        (**self).global_integrity().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_empty() {
        assert!(EventFilter::default().is_empty());
    }

    #[test]
    fn test_filter_with_field_is_not_empty() {
        let filter = EventFilter {
            asset_id: Some("paid-001".to_string()),
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }
}
