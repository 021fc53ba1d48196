//! Heirloom Registry Client
//!
//! Thin read-only HTTP adapter over the ecosystem's asset-registry
//! service. It normalizes the Registry's wire records into the internal
//! [`Asset`](heirloom_domain::Asset) model and degrades every failure
//! class to an empty result, so callers see absence rather than errors.
//!
//! The Registry owns the data; nothing here caches or mutates it.
//!
//! # Examples
//!
//! ```no_run
//! use heirloom_registry::{RegistryClient, RegistryConfig};
//!
//! # async fn run() {
//! let client = RegistryClient::new(RegistryConfig::default()).unwrap();
//!
//! // Absent and unreachable both come back as None; diagnostics go to
//! // the tracing subscriber.
//! let asset = client.asset("paid-001").await;
//! # let _ = asset;
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
mod wire;

pub use client::RegistryClient;
pub use config::RegistryConfig;
pub use error::RegistryError;
