//! Read-only provenance query surface

use crate::builder::TimelineBuilder;
use crate::prober::IntegrityProber;
use heirloom_domain::{
    EventFilter, EventSource, IntegritySource, LedgerStatus, ProvenanceEvent, ProvenanceTimeline,
};
use std::sync::Arc;

/// The query surface the rest of the application calls.
///
/// Bundles the timeline builder and the integrity prober over one shared
/// Ledger client (or any combined source). Every operation is read-only;
/// nothing here accepts writes. Construct it once with an injected
/// client and share it freely - it holds no mutable state.
///
/// # Examples
///
/// ```no_run
/// use heirloom_ledger::{LedgerClient, LedgerConfig};
/// use heirloom_timeline::ProvenanceService;
///
/// # async fn run() {
/// let client = LedgerClient::new(LedgerConfig::default()).unwrap();
/// let service = ProvenanceService::new(client);
///
/// let timeline = service.timeline("paid-001").await;
/// println!("{} events, chain {:?}", timeline.total_events, timeline.chain_integrity);
/// # }
/// ```
pub struct ProvenanceService<S: EventSource + IntegritySource> {
    builder: TimelineBuilder<Arc<S>>,
    prober: IntegrityProber<Arc<S>>,
    source: Arc<S>,
}

impl<S: EventSource + IntegritySource> ProvenanceService<S> {
    /// Create the service over one source shared by all operations.
    pub fn new(source: S) -> Self {
        let source = Arc::new(source);
        Self {
            builder: TimelineBuilder::new(Arc::clone(&source)),
            prober: IntegrityProber::new(Arc::clone(&source)),
            source,
        }
    }

    /// The provenance timeline for one asset.
    pub async fn timeline(&self, asset_id: &str) -> ProvenanceTimeline {
        self.builder.timeline(asset_id).await
    }

    /// All events recorded under one anchor, in upstream order.
    pub async fn anchor_events(&self, anchor_id: &str) -> Vec<ProvenanceEvent> {
        self.source.events_for_anchor(anchor_id).await
    }

    /// Events matching an arbitrary filter set, in upstream order.
    pub async fn events(&self, filter: &EventFilter) -> Vec<ProvenanceEvent> {
        self.source.query_events(filter).await
    }

    /// The Ledger's system-wide integrity status.
    pub async fn ledger_status(&self) -> LedgerStatus {
        self.prober.probe().await
    }
}
