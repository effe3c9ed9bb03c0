//! streamgate policy library entry.
//!
//! This crate wires the strict config loader, the per-project metadata
//! registry, the substream reroute policy, and the caller-side reroute
//! context together. It is intended to be consumed by an ingest pipeline and
//! by integration tests.

pub mod config;
pub mod context;
pub mod policy;
pub mod reroute;

pub use context::ClusterStreams;
pub use policy::StreamsPermissions;
pub use reroute::RerouteContext;
