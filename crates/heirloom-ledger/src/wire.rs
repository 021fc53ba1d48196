//! Ledger wire format
//!
//! The Ledger speaks camelCase JSON and has shipped two envelope shapes:
//! the documented `{ "data": { "events": [...] } }` and the legacy flat
//! `{ "events": [...] }`. Both are accepted via an explicit two-step
//! parse - documented shape first, then the legacy fallback - and
//! anything else is a parse error rather than silently tolerated.

use chrono::{DateTime, Utc};
use heirloom_domain::{LedgerStatus, ProvenanceEvent};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::LedgerError;

/// One provenance event as the Ledger sends it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EventRecord {
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub asset_id: String,
    #[serde(default)]
    pub anchor_id: Option<String>,
    #[serde(default)]
    pub actor_id: String,
    #[serde(default)]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub payload: Map<String, Value>,
    #[serde(default)]
    pub payload_hash: String,
    #[serde(default)]
    pub entry_hash: String,
    #[serde(default)]
    pub previous_hash: Option<String>,
    #[serde(default)]
    pub sequence_number: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<EventRecord> for ProvenanceEvent {
    fn from(record: EventRecord) -> Self {
        ProvenanceEvent {
            event_id: record.event_id,
            source: record.source,
            event_type: record.event_type,
            asset_id: record.asset_id,
            anchor_id: record.anchor_id,
            actor_id: record.actor_id,
            correlation_id: record.correlation_id,
            payload: record.payload,
            payload_hash: record.payload_hash,
            entry_hash: record.entry_hash,
            previous_hash: record.previous_hash,
            sequence_number: record.sequence_number,
            created_at: record.created_at.unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EventsBody {
    events: Vec<EventRecord>,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Integrity verdict as the Ledger sends it.
///
/// `valid` is deliberately required: a body without it is rejected
/// instead of defaulting, so garbage can never read as a verdict.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntegrityRecord {
    valid: bool,
    #[serde(default)]
    total_entries: u64,
    #[serde(default)]
    verified_at: Option<DateTime<Utc>>,
}

impl From<IntegrityRecord> for LedgerStatus {
    fn from(record: IntegrityRecord) -> Self {
        LedgerStatus {
            valid: record.valid,
            total_entries: record.total_entries,
            last_verified: record.verified_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Parse an event-list response body, accepting both envelope shapes.
pub(crate) fn parse_events_body(body: &str) -> Result<Vec<ProvenanceEvent>, LedgerError> {
    if let Ok(envelope) = serde_json::from_str::<DataEnvelope<EventsBody>>(body) {
        return Ok(envelope.data.events.into_iter().map(Into::into).collect());
    }
    if let Ok(flat) = serde_json::from_str::<EventsBody>(body) {
        return Ok(flat.events.into_iter().map(Into::into).collect());
    }

    Err(LedgerError::Malformed(
        "body matches neither {data:{events}} nor {events}".to_string(),
    ))
}

/// Parse the integrity-check response body, accepting both envelope shapes.
pub(crate) fn parse_integrity_body(body: &str) -> Result<LedgerStatus, LedgerError> {
    if let Ok(envelope) = serde_json::from_str::<DataEnvelope<IntegrityRecord>>(body) {
        return Ok(envelope.data.into());
    }
    if let Ok(flat) = serde_json::from_str::<IntegrityRecord>(body) {
        return Ok(flat.into());
    }

    Err(LedgerError::Malformed(
        "body matches neither {data:{valid,..}} nor {valid,..}".to_string(),
    ))
}
