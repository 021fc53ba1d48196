//! Heirloom Timeline Layer
//!
//! The application layer of the provenance core: it wires the Ledger
//! client (or any [`EventSource`](heirloom_domain::EventSource)) to the
//! pure timeline algorithm in `heirloom-domain` and exposes the read-only
//! query surface the rest of the application calls.
//!
//! # Components
//!
//! - [`TimelineBuilder`]: fetch an asset's events, sort, verify the chain
//! - [`IntegrityProber`]: the Ledger's system-wide integrity signal
//! - [`ProvenanceService`]: facade bundling both over one shared client
//! - [`MemoryLedger`]: deterministic in-memory fake for tests
//!
//! Everything is request-scoped and side-effect-free: each query fetches
//! fresh, computes locally, and returns - nothing is cached or persisted.
//!
//! # Examples
//!
//! ```
//! use heirloom_timeline::{MemoryLedger, ProvenanceService};
//!
//! # async fn run() {
//! let ledger = MemoryLedger::new();
//! let service = ProvenanceService::new(ledger);
//!
//! let timeline = service.timeline("paid-001").await;
//! assert!(timeline.is_empty());
//! # }
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod memory;
pub mod prober;
pub mod service;

pub use builder::TimelineBuilder;
pub use memory::MemoryLedger;
pub use prober::IntegrityProber;
pub use service::ProvenanceService;
