//! Per-project stream enablement metadata.
//!
//! Owned by the cluster metadata store; the policy layer only reads it.
//! A project with no streams metadata behaves as [`StreamsMetadata::EMPTY`].

use serde::Deserialize;

/// Enablement flags for every stream type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamsMetadata {
    #[serde(default, rename = "logs")]
    pub logs_enabled: bool,
}

impl StreamsMetadata {
    /// All streams disabled.
    pub const EMPTY: StreamsMetadata = StreamsMetadata {
        logs_enabled: false,
    };

    pub fn is_logs_enabled(&self) -> bool {
        self.logs_enabled
    }
}

/// Metadata of a single project, as seen by a reroute check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub id: String,
    streams: Option<StreamsMetadata>,
}

impl ProjectMetadata {
    pub fn new(id: impl Into<String>, streams: Option<StreamsMetadata>) -> Self {
        Self {
            id: id.into(),
            streams,
        }
    }
}

/// Read accessor over whatever carries streams metadata.
pub trait StreamsMetadataSource {
    /// Explicit metadata, if any was recorded.
    fn custom_streams(&self) -> Option<&StreamsMetadata>;

    /// Recorded metadata or [`StreamsMetadata::EMPTY`].
    fn streams(&self) -> &StreamsMetadata {
        self.custom_streams().unwrap_or(&StreamsMetadata::EMPTY)
    }
}

impl StreamsMetadataSource for ProjectMetadata {
    fn custom_streams(&self) -> Option<&StreamsMetadata> {
        self.streams.as_ref()
    }
}

impl StreamsMetadataSource for StreamsMetadata {
    fn custom_streams(&self) -> Option<&StreamsMetadata> {
        Some(self)
    }
}

impl StreamsMetadataSource for Option<StreamsMetadata> {
    fn custom_streams(&self) -> Option<&StreamsMetadata> {
        self.as_ref()
    }
}
