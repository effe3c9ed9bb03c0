//! streamgate core: stream types, enablement metadata, and the shared error surface.
//!
//! This crate defines the vocabulary the policy layer reasons about: the closed
//! set of managed stream types, the per-project enablement flags, and the
//! errors a reroute check can raise. It carries no logging or runtime
//! dependencies so it can be embedded by any ingest pipeline.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `StreamsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metadata;
pub mod stream;

pub use error::{PolicyViolation, Result, StreamsError};
pub use metadata::{ProjectMetadata, StreamsMetadata, StreamsMetadataSource};
pub use stream::StreamType;
