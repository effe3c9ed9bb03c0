use std::collections::HashSet;

use streamgate_core::error::Result;
use streamgate_core::StreamsMetadataSource;

use crate::policy::StreamsPermissions;

/// Routing state of a single document moving through an ingest pipeline.
#[derive(Debug, Clone)]
pub struct RerouteContext {
    current: String,
    index_history: HashSet<String>,
}

impl RerouteContext {
    /// Start at `index`; the starting index counts as visited.
    pub fn new(index: impl Into<String>) -> Self {
        let current = index.into();
        let mut index_history = HashSet::new();
        index_history.insert(current.clone());
        Self {
            current,
            index_history,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn index_history(&self) -> &HashSet<String> {
        &self.index_history
    }

    /// Move to `destination` if the policy allows it.
    ///
    /// On rejection the context is left untouched.
    pub fn reroute(
        &mut self,
        permissions: &StreamsPermissions,
        metadata: &impl StreamsMetadataSource,
        destination: &str,
    ) -> Result<()> {
        permissions.check_reroute_allowed(metadata, &self.index_history, destination)?;
        tracing::debug!(from = %self.current, to = %destination, "rerouted");
        self.current = destination.to_string();
        self.index_history.insert(self.current.clone());
        Ok(())
    }
}
