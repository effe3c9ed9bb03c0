//! Cluster-side context shared across callers.
//!
//! `ClusterStreams` holds the per-project streams metadata compiled from
//! config. It is read-only after construction.

pub mod cluster;

pub use cluster::ClusterStreams;
