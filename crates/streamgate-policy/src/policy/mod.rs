//! Policy layer (substream containment).
//!
//! Decides whether a document may be rerouted into a managed stream's
//! substream, given the project's enablement flags and the document's index
//! history.

pub mod engine;

pub use engine::StreamsPermissions;
