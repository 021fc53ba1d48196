//! Heirloom Domain Layer
//!
//! This crate contains the core data model and the only algorithmically
//! interesting logic in the provenance core: timeline construction and
//! hash-chain integrity classification.
//!
//! ## Key Concepts
//!
//! - **Asset**: a registry record for one heirloom (ownership, valuation,
//!   categorization), identified ecosystem-wide by its PAID
//! - **ProvenanceEvent**: one immutable entry in the Ledger's append-only
//!   log, hash-linked to its predecessor
//! - **ProvenanceTimeline**: the derived, per-asset view - ordered events
//!   plus a chain-integrity verdict. Built on demand, never persisted
//! - **Anchor**: a grouping identifier linking related assets or events
//!
//! ## Architecture
//!
//! Pure model and logic only. HTTP adapters for the Registry and Ledger
//! services live in `heirloom-registry` and `heirloom-ledger`; they plug in
//! through the trait seams defined in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod asset;
pub mod event;
pub mod status;
pub mod timeline;
pub mod traits;

// Re-exports for convenience
pub use asset::Asset;
pub use event::ProvenanceEvent;
pub use status::LedgerStatus;
pub use timeline::{ChainIntegrity, ProvenanceTimeline};
pub use traits::{EventFilter, EventSource, IntegritySource};
