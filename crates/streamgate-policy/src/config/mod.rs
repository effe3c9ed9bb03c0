//! Project streams configuration.
//!
//! YAML is parsed with `deny_unknown_fields` at every level and then
//! validated as a whole; a config that loads is safe to hand to
//! [`ClusterStreams::from_config`](crate::ClusterStreams::from_config).

pub mod schema;

use std::path::Path;

use streamgate_core::error::{Result, StreamsError};

pub use schema::{ProjectConfig, StreamsConfig};

/// Read and validate the config at `path`.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<StreamsConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        StreamsError::Internal(format!("cannot read streams config {}: {e}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), "parsing streams config");
    load_from_str(&raw)
}

/// Parse and validate a YAML document.
pub fn load_from_str(yaml: &str) -> Result<StreamsConfig> {
    serde_yaml::from_str::<StreamsConfig>(yaml)
        .map_err(|e| StreamsError::BadRequest(format!("malformed streams config: {e}")))
        .and_then(|cfg| cfg.validate().map(|()| cfg))
}
