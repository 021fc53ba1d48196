//! Heirloom Ledger Client
//!
//! Read-only HTTP adapter over the ecosystem's append-only provenance
//! log. It fetches raw events for an asset, an anchor, or an arbitrary
//! filter set, normalizes the wire representation into
//! [`ProvenanceEvent`](heirloom_domain::ProvenanceEvent), and exposes the
//! Ledger's global integrity check.
//!
//! Two things this client deliberately does NOT do:
//!
//! - **Sort.** Events come back in whatever order the Ledger returned
//!   them; ordering is the timeline builder's job.
//! - **Error out.** Not-found and every failure class degrade to an empty
//!   list (logged), matching the Registry client's contract. The one
//!   exception in spirit is the integrity probe, which fails closed: an
//!   unreachable integrity service is reported as `valid: false`, never
//!   as healthy.
//!
//! The client implements the `EventSource` and `IntegritySource` seams
//! from `heirloom-domain`, so the timeline layer can swap in fakes.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
mod wire;

pub use client::LedgerClient;
pub use config::LedgerConfig;
pub use error::LedgerError;
