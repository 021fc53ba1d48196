//! Registry client implementation.

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::wire::AssetRecord;
use heirloom_domain::Asset;
use tracing::{debug, warn};

/// Read-only client for the asset-registry service.
///
/// Built once and reused; it holds no mutable state after construction,
/// so one instance is safe to share across concurrent lookups. Inject it
/// where it is needed rather than stashing it in a global.
///
/// Failure policy: a 404 means the data genuinely is not there; every
/// other failure (network error, non-2xx status, malformed body) is
/// logged and collapses to the same empty result. Callers cannot tell
/// "truly absent" from "upstream unavailable" - an accepted
/// simplification; the distinction survives in the logs.
pub struct RegistryClient {
    config: RegistryConfig,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Create a new Registry client.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Config`] if the configuration is invalid
    /// or the HTTP client cannot be constructed.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        config.validate().map_err(RegistryError::Config)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RegistryError::Config(format!("HTTP client build failed: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Look up a single asset by its PAID.
    ///
    /// Returns `None` for a nonexistent PAID, and also when the Registry
    /// is unreachable or misbehaving (logged).
    pub async fn asset(&self, paid: &str) -> Option<Asset> {
        if paid.trim().is_empty() {
            warn!("registry: asset lookup skipped, empty PAID");
            return None;
        }

        match self.fetch_asset(paid).await {
            Ok(found) => {
                debug!("registry: asset lookup for {} -> {}", paid, found.is_some());
                found
            }
            Err(e) => {
                warn!("registry: asset lookup for {} degraded to empty: {}", paid, e);
                None
            }
        }
    }

    /// All assets belonging to one owner. Possibly empty.
    pub async fn assets_by_owner(&self, owner_id: &str) -> Vec<Asset> {
        if owner_id.trim().is_empty() {
            warn!("registry: owner search skipped, empty owner id");
            return Vec::new();
        }

        let params = [("owner_id", owner_id)];
        match self.fetch_assets(&params).await {
            Ok(assets) => assets,
            Err(e) => {
                warn!("registry: owner search for {} degraded to empty: {}", owner_id, e);
                Vec::new()
            }
        }
    }

    /// All assets registered by a source app, optionally narrowed to one
    /// source-local asset id. Possibly empty - an upstream 200 with an
    /// empty array normalizes to an empty list, not an error.
    pub async fn assets_by_source(
        &self,
        source_app: &str,
        source_asset_id: Option<&str>,
    ) -> Vec<Asset> {
        if source_app.trim().is_empty() {
            warn!("registry: source search skipped, empty source app");
            return Vec::new();
        }

        let mut params = vec![("source_app", source_app)];
        if let Some(source_id) = source_asset_id {
            params.push(("source_id", source_id));
        }

        match self.fetch_assets(&params).await {
            Ok(assets) => assets,
            Err(e) => {
                warn!(
                    "registry: source search for {}/{:?} degraded to empty: {}",
                    source_app, source_asset_id, e
                );
                Vec::new()
            }
        }
    }

    async fn fetch_asset(&self, paid: &str) -> Result<Option<Asset>, RegistryError> {
        let url = format!(
            "{}/v1/assets/{}",
            self.config.base_url.trim_end_matches('/'),
            paid
        );

        let response = self.http.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(RegistryError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        let record: AssetRecord = response
            .json()
            .await
            .map_err(|e| RegistryError::Malformed(e.to_string()))?;

        Ok(Some(record.into()))
    }

    async fn fetch_assets(&self, params: &[(&str, &str)]) -> Result<Vec<Asset>, RegistryError> {
        let url = format!("{}/v1/assets", self.config.base_url.trim_end_matches('/'));

        let response = self.http.get(&url).query(params).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(RegistryError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        let records: Vec<AssetRecord> = response
            .json()
            .await
            .map_err(|e| RegistryError::Malformed(e.to_string()))?;

        Ok(records.into_iter().map(Asset::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RegistryClient::new(RegistryConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let result = RegistryClient::new(RegistryConfig::new(""));
        assert!(matches!(result, Err(RegistryError::Config(_))));
    }

    #[tokio::test]
    async fn test_empty_paid_short_circuits() {
        // No request is issued for an empty identifier
        let client = RegistryClient::new(RegistryConfig::new("http://localhost:1")).unwrap();
        assert!(client.asset("").await.is_none());
        assert!(client.asset("   ").await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_registry_degrades_to_empty() {
        // Port 1 refuses connections; every lookup collapses to empty
        let mut config = RegistryConfig::new("http://localhost:1");
        config.timeout_secs = 2;
        let client = RegistryClient::new(config).unwrap();

        assert!(client.asset("paid-001").await.is_none());
        assert!(client.assets_by_owner("user-7").await.is_empty());
        assert!(client
            .assets_by_source("origins", Some("missing"))
            .await
            .is_empty());
    }
}
