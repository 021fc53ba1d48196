//! Asset module - the Registry's view of a single heirloom

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An asset as held by the Registry service.
///
/// This is a read-through copy of the Registry's record: the Registry owns
/// the data, this core never caches or mutates it. Monetary value is kept
/// as an integer scaled by 1e6 (`current_value_micros`) so no floating
/// point ever touches currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Globally unique asset identifier (PAID). Immutable.
    pub paid: String,

    /// Name of the application the asset originated from
    pub source_app: String,

    /// The asset's identifier within its originating application
    pub source_asset_id: String,

    /// Asset type (e.g., "photograph", "document", "keepsake")
    pub asset_type: String,

    /// Category within the type
    pub category: String,

    /// Display name
    pub name: String,

    /// Free-form description, if the owner provided one
    pub description: Option<String>,

    /// Identifier of the current owner
    pub owner_id: String,

    /// Current value in micro-units of currency (value * 1_000_000)
    pub current_value_micros: i64,

    /// Optional grouping key linking related assets
    pub anchor_id: Option<String>,

    /// When the Registry created the record
    pub created_at: Option<DateTime<Utc>>,

    /// When the Registry last updated the record
    pub updated_at: Option<DateTime<Utc>>,
}

impl Asset {
    /// Current value in whole currency units, discarding sub-unit precision.
    pub fn current_value_whole(&self) -> i64 {
        self.current_value_micros / 1_000_000
    }
}
