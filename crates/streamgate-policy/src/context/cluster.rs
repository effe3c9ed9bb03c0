use std::collections::{HashMap, HashSet};

use streamgate_core::error::{Result, StreamsError};
use streamgate_core::{ProjectMetadata, StreamType};

use crate::config::StreamsConfig;
use crate::policy::StreamsPermissions;

/// Per-project streams metadata. Construct once, then share via `Arc`.
#[derive(Debug)]
pub struct ClusterStreams {
    projects: HashMap<String, ProjectMetadata>,
    permissions: StreamsPermissions,
}

impl ClusterStreams {
    /// Build the registry from a validated config.
    pub fn from_config(cfg: &StreamsConfig) -> Self {
        let projects: HashMap<_, _> = cfg
            .projects
            .iter()
            .map(|p| (p.id.clone(), p.to_metadata()))
            .collect();
        tracing::info!(projects = projects.len(), "streams metadata loaded");
        Self {
            projects,
            permissions: StreamsPermissions::new(),
        }
    }

    pub fn project_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.projects.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn project(&self, project_id: &str) -> Option<&ProjectMetadata> {
        self.projects.get(project_id)
    }

    /// Resolve a project or return a client-visible error.
    pub fn resolve_project(&self, project_id: &str) -> Result<&ProjectMetadata> {
        self.project(project_id)
            .ok_or_else(|| StreamsError::UnknownProject(project_id.to_string()))
    }

    pub fn stream_type_is_enabled(&self, project_id: &str, stream_type: StreamType) -> Result<bool> {
        let project = self.resolve_project(project_id)?;
        Ok(self.permissions.stream_type_is_enabled(stream_type, project))
    }

    /// Run the substream reroute check against the project's metadata.
    pub fn check_reroute(
        &self,
        project_id: &str,
        index_history: &HashSet<String>,
        destination: &str,
    ) -> Result<()> {
        let project = self.resolve_project(project_id)?;
        self.permissions
            .check_reroute_allowed(project, index_history, destination)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use streamgate_core::error::ClientCode;

    use super::*;
    use crate::config;

    fn cluster() -> ClusterStreams {
        let cfg = config::load_from_str(
            r#"
version: 1
projects:
  - id: "default"
    streams: { logs: true }
  - id: "bare"
"#,
        )
        .expect("must parse");
        ClusterStreams::from_config(&cfg)
    }

    #[test]
    fn projects_from_config() {
        let c = cluster();
        assert_eq!(c.project_ids(), vec!["bare", "default"]);
        assert!(c.stream_type_is_enabled("default", StreamType::Logs).unwrap());
        assert!(!c.stream_type_is_enabled("bare", StreamType::Logs).unwrap());
    }

    #[test]
    fn unknown_project_is_not_found() {
        let c = cluster();
        let err = c.check_reroute("nope", &HashSet::new(), "logs").unwrap_err();
        assert_eq!(err.client_code(), ClientCode::NotFound);
        assert!(c.stream_type_is_enabled("nope", StreamType::Logs).is_err());
    }

    #[test]
    fn check_follows_each_project_flags() {
        let c = cluster();
        let empty = HashSet::new();

        let err = c.check_reroute("default", &empty, "logs.a").unwrap_err();
        assert_eq!(err.client_code(), ClientCode::IllegalArgument);
        c.check_reroute("bare", &empty, "logs.a").unwrap();

        let via_root: HashSet<String> = ["logs".to_string()].into();
        c.check_reroute("default", &via_root, "logs.a").unwrap();
    }
}
