//! Timeline builder - fetch, order, verify

use heirloom_domain::{EventSource, ProvenanceTimeline};
use tracing::debug;

/// Builds per-asset provenance timelines from an injected event source.
///
/// One outbound fetch per invocation, then purely local computation (the
/// sort and chain walk live in
/// [`ProvenanceTimeline::from_events`]). Concurrent invocations for
/// different assets are fully independent; the builder holds no state
/// beyond the shared, read-only source.
pub struct TimelineBuilder<S: EventSource> {
    source: S,
}

impl<S: EventSource> TimelineBuilder<S> {
    /// Create a builder over the given event source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Build the provenance timeline for one asset.
    ///
    /// If the Ledger has nothing for the asset (or is unreachable - the
    /// source collapses both to empty), the timeline comes back with
    /// zero events and an `Unverified` chain.
    pub async fn timeline(&self, asset_id: &str) -> ProvenanceTimeline {
        let events = self.source.events_for_asset(asset_id).await;
        let timeline = ProvenanceTimeline::from_events(asset_id, events);

        debug!(
            "timeline for {}: {} events, chain {:?}",
            asset_id, timeline.total_events, timeline.chain_integrity
        );

        timeline
    }

    /// Access the underlying event source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
