use std::collections::HashSet;

use serde::Deserialize;
use streamgate_core::error::{Result, StreamsError};
use streamgate_core::{ProjectMetadata, StreamsMetadata};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamsConfig {
    pub version: u32,

    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

impl StreamsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StreamsError::UnsupportedVersion);
        }
        if self.projects.is_empty() {
            return Err(StreamsError::BadRequest("projects must not be empty".into()));
        }

        let mut seen = HashSet::with_capacity(self.projects.len());
        for p in &self.projects {
            p.validate()?;
            if !seen.insert(p.id.as_str()) {
                return Err(StreamsError::BadRequest(format!(
                    "duplicate project id: {}",
                    p.id
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub id: String,

    /// Absent means no streams metadata recorded (all disabled).
    #[serde(default)]
    pub streams: Option<StreamsMetadata>,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(StreamsError::BadRequest("project id must not be empty".into()));
        }
        Ok(())
    }

    pub fn to_metadata(&self) -> ProjectMetadata {
        ProjectMetadata::new(self.id.clone(), self.streams)
    }
}
