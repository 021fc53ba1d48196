//! In-memory Ledger fake for deterministic testing
//!
//! Mirrors the real client's contract without any network: events are
//! returned in insertion order (never sorted here), filters apply the
//! same criteria the Ledger would, and the integrity status defaults to
//! failure-closed until one is set.

use async_trait::async_trait;
use heirloom_domain::{
    EventFilter, EventSource, IntegritySource, LedgerStatus, ProvenanceEvent,
};
use std::sync::{Arc, Mutex};

/// Deterministic in-memory stand-in for the Ledger.
///
/// Clones share state (like the real client behind an `Arc`), so a test
/// can keep a handle for setup while the service under test holds
/// another.
///
/// # Examples
///
/// ```
/// use heirloom_timeline::MemoryLedger;
///
/// # async fn run() {
/// let ledger = MemoryLedger::new();
/// assert!(ledger.events_for_asset("paid-001").await.is_empty());
/// assert_eq!(ledger.fetch_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    events: Arc<Mutex<Vec<ProvenanceEvent>>>,
    status: Arc<Mutex<Option<LedgerStatus>>>,
    fetch_count: Arc<Mutex<usize>>,
}

impl MemoryLedger {
    /// Create an empty fake Ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event. Insertion order is upstream order.
    pub fn push_event(&self, event: ProvenanceEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// Append a batch of events.
    pub fn push_events(&self, events: impl IntoIterator<Item = ProvenanceEvent>) {
        self.events.lock().unwrap().extend(events);
    }

    /// Set the global integrity status the fake reports.
    pub fn set_status(&self, status: LedgerStatus) {
        *self.status.lock().unwrap() = Some(status);
    }

    /// Number of fetches served so far (all read operations count).
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }

    /// All events recorded for one asset, in insertion order.
    pub async fn events_for_asset(&self, asset_id: &str) -> Vec<ProvenanceEvent> {
        EventSource::events_for_asset(self, asset_id).await
    }

    fn record_fetch(&self) {
        *self.fetch_count.lock().unwrap() += 1;
    }
}

fn matches(event: &ProvenanceEvent, filter: &EventFilter) -> bool {
    filter.source.as_deref().is_none_or(|v| event.source == v)
        && filter
            .event_type
            .as_deref()
            .is_none_or(|v| event.event_type == v)
        && filter.asset_id.as_deref().is_none_or(|v| event.asset_id == v)
        && filter
            .anchor_id
            .as_deref()
            .is_none_or(|v| event.anchor_id.as_deref() == Some(v))
        && filter.actor_id.as_deref().is_none_or(|v| event.actor_id == v)
        && filter.from.is_none_or(|t| event.created_at >= t)
        && filter.until.is_none_or(|t| event.created_at <= t)
}

#[async_trait]
impl EventSource for MemoryLedger {
    async fn events_for_asset(&self, asset_id: &str) -> Vec<ProvenanceEvent> {
        self.record_fetch();
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.asset_id == asset_id)
            .cloned()
            .collect()
    }

    async fn events_for_anchor(&self, anchor_id: &str) -> Vec<ProvenanceEvent> {
        self.record_fetch();
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.anchor_id.as_deref() == Some(anchor_id))
            .cloned()
            .collect()
    }

    async fn query_events(&self, filter: &EventFilter) -> Vec<ProvenanceEvent> {
        self.record_fetch();
        let limit = filter.limit.map(|n| n as usize).unwrap_or(usize::MAX);
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches(e, filter))
            .take(limit)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl IntegritySource for MemoryLedger {
    async fn global_integrity(&self) -> LedgerStatus {
        self.record_fetch();
        self.status
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(LedgerStatus::failure_closed)
    }
}
