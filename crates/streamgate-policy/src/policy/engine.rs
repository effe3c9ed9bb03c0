use std::collections::HashSet;

use streamgate_core::{PolicyViolation, StreamType, StreamsMetadataSource};

static SHARED: StreamsPermissions = StreamsPermissions;

/// Substream reroute policy.
///
/// Holds no state: construct freely or borrow the process-wide
/// [`StreamsPermissions::shared`] instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamsPermissions;

impl StreamsPermissions {
    pub const fn new() -> Self {
        Self
    }

    pub fn shared() -> &'static StreamsPermissions {
        &SHARED
    }

    /// Enablement flag for `stream_type`; missing metadata reads as disabled.
    pub fn stream_type_is_enabled(
        &self,
        stream_type: StreamType,
        metadata: &impl StreamsMetadataSource,
    ) -> bool {
        let streams = metadata.streams();
        match stream_type {
            StreamType::Logs => streams.is_logs_enabled(),
        }
    }

    /// Reject `destination` if it is a substream of an enabled stream type
    /// the document never passed through.
    ///
    /// Stream types are checked in declaration order and the first violation
    /// wins. A destination equal to a stream name is never a substream.
    pub fn check_reroute_allowed(
        &self,
        metadata: &impl StreamsMetadataSource,
        index_history: &HashSet<String>,
        destination: &str,
    ) -> Result<(), PolicyViolation> {
        for &stream_type in StreamType::ALL {
            let stream_name = stream_type.stream_name();
            if self.stream_type_is_enabled(stream_type, metadata)
                && stream_type.is_substream(destination)
                && !index_history.contains(stream_name)
            {
                tracing::warn!(%destination, stream = %stream_name, "substream reroute rejected");
                return Err(PolicyViolation {
                    destination: destination.to_string(),
                    stream: stream_name,
                });
            }
        }
        tracing::debug!(%destination, "reroute allowed");
        Ok(())
    }
}
