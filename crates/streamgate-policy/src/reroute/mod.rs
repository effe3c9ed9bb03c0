//! Caller side of a reroute: tracks where a document is and where it has been.

pub mod context;

pub use context::RerouteContext;
