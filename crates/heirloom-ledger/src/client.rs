//! Ledger client implementation.

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::wire::{parse_events_body, parse_integrity_body};
use async_trait::async_trait;
use heirloom_domain::{EventFilter, EventSource, IntegritySource, LedgerStatus, ProvenanceEvent};
use tracing::{debug, warn};

/// Read-only client for the append-only provenance log.
///
/// Built once and reused; no mutable state after construction, safe to
/// share across concurrent fetches. Events are returned in upstream
/// order - sorting belongs to the timeline builder.
pub struct LedgerClient {
    config: LedgerConfig,
    http: reqwest::Client,
}

impl LedgerClient {
    /// Create a new Ledger client.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Config`] if the configuration is invalid or
    /// the HTTP client cannot be constructed.
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate().map_err(LedgerError::Config)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LedgerError::Config(format!("HTTP client build failed: {}", e)))?;

        Ok(Self { config, http })
    }

    /// All events recorded for one asset, in upstream order.
    ///
    /// Empty on not-found and on every failure class (logged).
    pub async fn events_for_asset(&self, asset_id: &str) -> Vec<ProvenanceEvent> {
        if asset_id.trim().is_empty() {
            warn!("ledger: asset event fetch skipped, empty asset id");
            return Vec::new();
        }

        let path = format!("/assets/{}/events", asset_id);
        match self.fetch_events(&path, &[]).await {
            Ok(events) => {
                debug!("ledger: fetched {} events for asset {}", events.len(), asset_id);
                events
            }
            Err(e) => {
                warn!("ledger: asset event fetch for {} degraded to empty: {}", asset_id, e);
                Vec::new()
            }
        }
    }

    /// All events recorded under one anchor, in upstream order.
    pub async fn events_for_anchor(&self, anchor_id: &str) -> Vec<ProvenanceEvent> {
        if anchor_id.trim().is_empty() {
            warn!("ledger: anchor event fetch skipped, empty anchor id");
            return Vec::new();
        }

        let path = format!("/anchors/{}/events", anchor_id);
        match self.fetch_events(&path, &[]).await {
            Ok(events) => events,
            Err(e) => {
                warn!("ledger: anchor event fetch for {} degraded to empty: {}", anchor_id, e);
                Vec::new()
            }
        }
    }

    /// Events matching an arbitrary filter set, in upstream order.
    ///
    /// Only present filter fields become query parameters; absent fields
    /// are omitted entirely.
    pub async fn query_events(&self, filter: &EventFilter) -> Vec<ProvenanceEvent> {
        let params = filter_params(filter);
        match self.fetch_events("/events", &params).await {
            Ok(events) => events,
            Err(e) => {
                warn!("ledger: filtered event query degraded to empty: {}", e);
                Vec::new()
            }
        }
    }

    /// The Ledger's own global integrity check.
    ///
    /// Fails closed: an unreachable or garbled integrity endpoint comes
    /// back as `valid: false` with zero entries, never as healthy.
    pub async fn global_integrity(&self) -> LedgerStatus {
        match self.fetch_integrity().await {
            Ok(status) => status,
            Err(e) => {
                warn!("ledger: integrity probe failed closed: {}", e);
                LedgerStatus::failure_closed()
            }
        }
    }

    async fn fetch_events(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<ProvenanceEvent>, LedgerError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

        let mut request = self.http.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = request.send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(LedgerError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        parse_events_body(&body)
    }

    async fn fetch_integrity(&self) -> Result<LedgerStatus, LedgerError> {
        let url = format!(
            "{}/integrity/verify",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LedgerError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        parse_integrity_body(&body)
    }
}

#[async_trait]
impl EventSource for LedgerClient {
    async fn events_for_asset(&self, asset_id: &str) -> Vec<ProvenanceEvent> {
        LedgerClient::events_for_asset(self, asset_id).await
    }

    async fn events_for_anchor(&self, anchor_id: &str) -> Vec<ProvenanceEvent> {
        LedgerClient::events_for_anchor(self, anchor_id).await
    }

    async fn query_events(&self, filter: &EventFilter) -> Vec<ProvenanceEvent> {
        LedgerClient::query_events(self, filter).await
    }
}

#[async_trait]
impl IntegritySource for LedgerClient {
    async fn global_integrity(&self) -> LedgerStatus {
        LedgerClient::global_integrity(self).await
    }
}

/// Encode a filter as query parameters, one per present field.
fn filter_params(filter: &EventFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if let Some(source) = &filter.source {
        params.push(("source", source.clone()));
    }
    if let Some(event_type) = &filter.event_type {
        params.push(("eventType", event_type.clone()));
    }
    if let Some(asset_id) = &filter.asset_id {
        params.push(("assetId", asset_id.clone()));
    }
    if let Some(anchor_id) = &filter.anchor_id {
        params.push(("anchorId", anchor_id.clone()));
    }
    if let Some(actor_id) = &filter.actor_id {
        params.push(("actorId", actor_id.clone()));
    }
    if let Some(from) = &filter.from {
        params.push(("from", from.to_rfc3339()));
    }
    if let Some(until) = &filter.until {
        params.push(("until", until.to_rfc3339()));
    }
    if let Some(limit) = filter.limit {
        params.push(("limit", limit.to_string()));
    }

    params
}
