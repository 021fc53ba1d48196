//! Provenance events - the Ledger's append-only history entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry in the Ledger's append-only provenance log.
///
/// Events are immutable once written and hash-linked: `previous_hash` of
/// event *n* must equal `entry_hash` of event *n-1* in `sequence_number`
/// order for the chain to be intact. The Ledger assigns `sequence_number`;
/// within one asset's event set it is unique and defines the total order.
/// `created_at` is reporting metadata only - source apps have clock skew,
/// so it must never be used to order the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEvent {
    /// Unique event identifier
    pub event_id: String,

    /// Name of the originating app or service
    pub source: String,

    /// Event type (e.g., "created", "transferred", "appraised")
    pub event_type: String,

    /// PAID of the asset this event belongs to
    pub asset_id: String,

    /// Optional grouping key linking related events
    pub anchor_id: Option<String>,

    /// Who or what caused the event
    pub actor_id: String,

    /// Links events produced by one logical upstream operation
    pub correlation_id: Option<String>,

    /// Opaque source-defined data. Schema belongs to the source; this core
    /// never interprets it.
    pub payload: Map<String, Value>,

    /// Content hash of `payload`, for tamper detection independent of
    /// chain position
    pub payload_hash: String,

    /// Hash binding this event to its position in the chain
    pub entry_hash: String,

    /// `entry_hash` of the preceding event, or `None` for a chain's first
    /// link (and for sources that do not participate in chaining)
    pub previous_hash: Option<String>,

    /// Ledger-assigned, monotonically increasing position
    pub sequence_number: u64,

    /// When the event was created (reporting metadata only)
    pub created_at: DateTime<Utc>,
}

impl ProvenanceEvent {
    /// Whether this event carries a back-link to a predecessor.
    pub fn is_chained(&self) -> bool {
        self.previous_hash.is_some()
    }
}
