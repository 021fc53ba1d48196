//! Timeline construction and hash-chain verification
//!
//! This is the core algorithm of the provenance system. Given the raw
//! events the Ledger returned for one asset (in whatever order), it
//! produces the ordered timeline and classifies the chain's integrity.
//!
//! Verification here is intentionally local and cheap: it checks that the
//! back-links the Ledger handed us are self-consistent, which is enough to
//! detect after-the-fact tampering or corruption. Recomputing hashes from
//! payloads is the Ledger's own write-time responsibility.

use crate::event::ProvenanceEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Integrity classification of one asset's event chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainIntegrity {
    /// Every present back-link matched its predecessor's entry hash
    Verified,
    /// At least one back-link mismatched; the chain cannot be trusted
    Broken,
    /// Nothing to verify (no events fetched)
    Unverified,
}

/// A per-asset provenance timeline.
///
/// Derived and ephemeral: constructed fresh for each query from whatever
/// the Ledger returned, handed to the caller, and discarded. It has no
/// identity or storage of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceTimeline {
    /// PAID of the asset the timeline describes
    pub asset_id: String,

    /// Number of events in the timeline
    pub total_events: usize,

    /// `created_at` of the first event in sequence order
    pub first_seen: Option<DateTime<Utc>>,

    /// `created_at` of the last event in sequence order
    pub last_seen: Option<DateTime<Utc>>,

    /// Distinct `source` values across all events
    pub sources: BTreeSet<String>,

    /// Chain verdict for the whole sequence
    pub chain_integrity: ChainIntegrity,

    /// `sequence_number` of the first event whose back-link mismatched,
    /// when `chain_integrity` is [`ChainIntegrity::Broken`]
    pub break_at: Option<u64>,

    /// The full event sequence, ordered by `sequence_number` ascending
    pub events: Vec<ProvenanceEvent>,
}

impl ProvenanceTimeline {
    /// Build a timeline from the raw events fetched for `asset_id`.
    ///
    /// Events may arrive in any order; they are sorted by
    /// `sequence_number` ascending, which is the single source of truth
    /// for chain order (`created_at` is never consulted - clock skew
    /// across source apps makes it unreliable). An empty input yields an
    /// [`ChainIntegrity::Unverified`] timeline: there is nothing to
    /// verify, and claiming `Verified` would overclaim.
    pub fn from_events(asset_id: impl Into<String>, mut events: Vec<ProvenanceEvent>) -> Self {
        let asset_id = asset_id.into();

        if events.is_empty() {
            return Self {
                asset_id,
                total_events: 0,
                first_seen: None,
                last_seen: None,
                sources: BTreeSet::new(),
                chain_integrity: ChainIntegrity::Unverified,
                break_at: None,
                events,
            };
        }

        events.sort_by_key(|e| e.sequence_number);

        let sources: BTreeSet<String> = events.iter().map(|e| e.source.clone()).collect();
        let (chain_integrity, break_at) = verify_chain(&events);
        let first_seen = events.first().map(|e| e.created_at);
        let last_seen = events.last().map(|e| e.created_at);

        Self {
            asset_id,
            total_events: events.len(),
            first_seen,
            last_seen,
            sources,
            chain_integrity,
            break_at,
            events,
        }
    }

    /// Whether the timeline holds no events at all.
    pub fn is_empty(&self) -> bool {
        self.total_events == 0
    }
}

/// Walk an already-sorted event sequence and classify its chain.
///
/// From the second event onward: an event whose `previous_hash` is present
/// but differs from its predecessor's `entry_hash` breaks the chain, and
/// the walk stops at the first break - conclusions past that point are
/// meaningless. A missing `previous_hash` is automatically consistent
/// (legitimate for a chain's first link and for non-chaining sources).
///
/// Returns the verdict plus the `sequence_number` of the breaking event,
/// if any. An empty slice has nothing to verify and reports
/// [`ChainIntegrity::Unverified`].
pub fn verify_chain(events: &[ProvenanceEvent]) -> (ChainIntegrity, Option<u64>) {
    if events.is_empty() {
        return (ChainIntegrity::Unverified, None);
    }

    for pair in events.windows(2) {
        if let Some(previous_hash) = &pair[1].previous_hash {
            if previous_hash != &pair[0].entry_hash {
                return (ChainIntegrity::Broken, Some(pair[1].sequence_number));
            }
        }
    }

    (ChainIntegrity::Verified, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(sequence: u64, entry: &str, previous: Option<&str>) -> ProvenanceEvent {
        ProvenanceEvent {
            event_id: format!("evt-{}", sequence),
            source: "origins".to_string(),
            event_type: "created".to_string(),
            asset_id: "paid-001".to_string(),
            anchor_id: None,
            actor_id: "user-7".to_string(),
            correlation_id: None,
            payload: serde_json::Map::new(),
            payload_hash: format!("p{}", sequence),
            entry_hash: entry.to_string(),
            previous_hash: previous.map(str::to_string),
            sequence_number: sequence,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, sequence as u32).unwrap(),
        }
    }

    #[test]
    fn test_linked_chain_is_verified() {
        let events = vec![
            event(1, "h1", None),
            event(2, "h2", Some("h1")),
            event(3, "h3", Some("h2")),
        ];

        let timeline = ProvenanceTimeline::from_events("paid-001", events);
        assert_eq!(timeline.chain_integrity, ChainIntegrity::Verified);
        assert_eq!(timeline.total_events, 3);
        assert_eq!(timeline.break_at, None);
    }

    #[test]
    fn test_mismatched_link_breaks_chain() {
        let events = vec![
            event(1, "h1", None),
            event(2, "h2", Some("h1")),
            event(3, "h3", Some("wrong")),
        ];

        let timeline = ProvenanceTimeline::from_events("paid-001", events);
        assert_eq!(timeline.chain_integrity, ChainIntegrity::Broken);
        assert_eq!(timeline.break_at, Some(3));
    }

    #[test]
    fn test_walk_stops_at_first_break() {
        // Link 2 is broken; link 3 would match but must not rescue the verdict
        let events = vec![
            event(1, "h1", None),
            event(2, "h2", Some("tampered")),
            event(3, "h3", Some("h2")),
        ];

        let (integrity, break_at) = verify_chain(&events);
        assert_eq!(integrity, ChainIntegrity::Broken);
        assert_eq!(break_at, Some(2));
    }

    #[test]
    fn test_empty_input_is_unverified() {
        let timeline = ProvenanceTimeline::from_events("paid-001", vec![]);
        assert_eq!(timeline.chain_integrity, ChainIntegrity::Unverified);
        assert_eq!(timeline.total_events, 0);
        assert!(timeline.is_empty());
        assert!(timeline.first_seen.is_none());
        assert!(timeline.last_seen.is_none());
        assert!(timeline.sources.is_empty());
    }

    #[test]
    fn test_unchained_events_are_consistent() {
        // Sources that do not participate in chaining carry no back-link
        let events = vec![event(1, "h1", None), event(2, "h2", None), event(3, "h3", None)];

        let timeline = ProvenanceTimeline::from_events("paid-001", events);
        assert_eq!(timeline.chain_integrity, ChainIntegrity::Verified);
    }

    #[test]
    fn test_sequence_order_wins_over_created_at() {
        // created_at runs backwards relative to sequence (clock skew);
        // the timeline must still order by sequence_number
        let mut late = event(1, "h1", None);
        late.created_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut early = event(2, "h2", Some("h1"));
        early.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let timeline = ProvenanceTimeline::from_events("paid-001", vec![early.clone(), late.clone()]);
        assert_eq!(timeline.events[0].sequence_number, 1);
        assert_eq!(timeline.events[1].sequence_number, 2);
        assert_eq!(timeline.chain_integrity, ChainIntegrity::Verified);
        assert_eq!(timeline.first_seen, Some(late.created_at));
        assert_eq!(timeline.last_seen, Some(early.created_at));
    }

    #[test]
    fn test_out_of_order_input_is_sorted() {
        let events = vec![
            event(3, "h3", Some("h2")),
            event(1, "h1", None),
            event(2, "h2", Some("h1")),
        ];

        let timeline = ProvenanceTimeline::from_events("paid-001", events);
        let order: Vec<u64> = timeline.events.iter().map(|e| e.sequence_number).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(timeline.chain_integrity, ChainIntegrity::Verified);
    }

    #[test]
    fn test_sources_are_distinct() {
        let mut a = event(1, "h1", None);
        a.source = "origins".to_string();
        let mut b = event(2, "h2", Some("h1"));
        b.source = "vault".to_string();
        let mut c = event(3, "h3", Some("h2"));
        c.source = "origins".to_string();

        let timeline = ProvenanceTimeline::from_events("paid-001", vec![c, a, b]);
        let expected: BTreeSet<String> =
            ["origins", "vault"].iter().map(|s| s.to_string()).collect();
        assert_eq!(timeline.sources, expected);
    }

    #[test]
    fn test_single_event_is_verified() {
        let timeline = ProvenanceTimeline::from_events("paid-001", vec![event(1, "h1", None)]);
        assert_eq!(timeline.chain_integrity, ChainIntegrity::Verified);
        assert_eq!(timeline.first_seen, timeline.last_seen);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn linked_events(count: usize) -> Vec<ProvenanceEvent> {
        (0..count)
            .map(|i| ProvenanceEvent {
                event_id: format!("evt-{}", i),
                source: format!("source-{}", i % 3),
                event_type: "created".to_string(),
                asset_id: "paid-prop".to_string(),
                anchor_id: None,
                actor_id: "actor".to_string(),
                correlation_id: None,
                payload: serde_json::Map::new(),
                payload_hash: format!("p{}", i),
                entry_hash: format!("h{}", i),
                previous_hash: if i == 0 { None } else { Some(format!("h{}", i - 1)) },
                sequence_number: i as u64 + 1,
                // Deliberately decreasing timestamps - skew must not matter
                created_at: Utc
                    .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
                    .unwrap()
                    - chrono::Duration::seconds(i as i64),
            })
            .collect()
    }

    proptest! {
        /// Property: sequence order is restored no matter how the input
        /// is permuted, and a well-linked chain stays verified.
        #[test]
        fn test_permutation_invariance(count in 1usize..40, seed in any::<u64>()) {
            let mut events = linked_events(count);

            // Deterministic pseudo-shuffle from the seed
            let mut state = seed;
            for i in (1..events.len()).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state % (i as u64 + 1)) as usize;
                events.swap(i, j);
            }

            let timeline = ProvenanceTimeline::from_events("paid-prop", events);

            let sequences: Vec<u64> =
                timeline.events.iter().map(|e| e.sequence_number).collect();
            let mut expected: Vec<u64> = (1..=count as u64).collect();
            expected.sort_unstable();
            prop_assert_eq!(sequences, expected);
            prop_assert_eq!(timeline.chain_integrity, ChainIntegrity::Verified);
            prop_assert_eq!(timeline.total_events, count);
        }

        /// Property: sources is exactly the distinct set of input sources.
        #[test]
        fn test_sources_match_input(count in 1usize..40) {
            let events = linked_events(count);
            let expected: BTreeSet<String> =
                events.iter().map(|e| e.source.clone()).collect();

            let timeline = ProvenanceTimeline::from_events("paid-prop", events);
            prop_assert_eq!(timeline.sources, expected);
        }

        /// Property: corrupting exactly one back-link always breaks the
        /// chain at that link, wherever it sits.
        #[test]
        fn test_single_corruption_detected(count in 2usize..40, pick in any::<prop::sample::Index>()) {
            let mut events = linked_events(count);
            let idx = pick.index(count - 1) + 1; // never the first link
            events[idx].previous_hash = Some("corrupted".to_string());
            let expected_break = events[idx].sequence_number;

            let timeline = ProvenanceTimeline::from_events("paid-prop", events);
            prop_assert_eq!(timeline.chain_integrity, ChainIntegrity::Broken);
            prop_assert_eq!(timeline.break_at, Some(expected_break));
        }
    }
}
