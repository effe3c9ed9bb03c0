//! JSON reroute scenario loader.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use serde::Deserialize;
use streamgate_core::StreamsMetadata;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    /// `null` means the project has no streams metadata.
    #[serde(default)]
    pub streams: Option<StreamsMetadata>,
    #[serde(default)]
    pub index_history: HashSet<String>,
    pub destination: String,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
    pub stream: String,
}
