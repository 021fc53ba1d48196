//! Registry wire format
//!
//! The Registry speaks snake_case JSON. Every field is mapped explicitly
//! into the internal [`Asset`] model - a 1:1 rename with no semantic
//! transformation - so the normalized record's shape can be inspected
//! without reference to the wire format. Missing fields are tolerated:
//! strings default to empty, optional fields to `None`.

use chrono::{DateTime, Utc};
use heirloom_domain::Asset;
use serde::Deserialize;

/// One asset record as the Registry sends it
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AssetRecord {
    #[serde(default)]
    pub paid: String,
    #[serde(default)]
    pub source_app: String,
    #[serde(default)]
    pub source_asset_id: String,
    #[serde(default)]
    pub asset_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub current_value_micros: i64,
    #[serde(default)]
    pub anchor_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AssetRecord> for Asset {
    fn from(record: AssetRecord) -> Self {
        Asset {
            paid: record.paid,
            source_app: record.source_app,
            source_asset_id: record.source_asset_id,
            asset_type: record.asset_type,
            category: record.category,
            name: record.name,
            description: record.description,
            owner_id: record.owner_id,
            current_value_micros: record.current_value_micros,
            anchor_id: record.anchor_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
