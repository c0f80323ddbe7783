//! Project file persistence.
//!
//! A project is the versioned JSON document the editor saves: named
//! sheets with their shapes, grids and calibration. The format version
//! gates loading so a newer, incompatible document fails with a clear
//! error instead of deserializing into garbage.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::ProjectError;
use crate::sheet::Sheet;

/// Current project file format version.
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Creation and modification stamps carried inside the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    /// Version of the application that wrote the file.
    pub app_version: String,
}

impl ProjectMetadata {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            created: now,
            modified: now,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// The root document of a saved project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub version: String,
    pub metadata: ProjectMetadata,
    pub name: String,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: ProjectMetadata::new(),
            name: name.into(),
            sheets: Vec::new(),
        }
    }

    pub fn sheet(&self, id: Uuid) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    pub fn sheet_mut(&mut self, id: Uuid) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.id == id)
    }

    /// Serializes to pretty-printed project JSON.
    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses project JSON, rejecting incompatible format versions.
    pub fn from_json(json: &str) -> Result<Project, ProjectError> {
        let project: Project = serde_json::from_str(json)?;
        if !version_supported(&project.version) {
            return Err(ProjectError::UnsupportedVersion {
                found: project.version,
            });
        }
        Ok(project)
    }
}

/// Versions sharing our major version load; anything else is rejected.
fn version_supported(version: &str) -> bool {
    let our_major = FILE_FORMAT_VERSION.split('.').next();
    version.split('.').next() == our_major
}

/// Writes the project to disk, refreshing its modification stamp.
pub fn save_project(project: &mut Project, path: &Path) -> Result<()> {
    project.metadata.modified = Utc::now();
    project.version = FILE_FORMAT_VERSION.to_string();
    let json = project
        .to_json()
        .context("Failed to serialize project")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write project file: {}", path.display()))?;
    debug!(path = %path.display(), sheets = project.sheets.len(), "saved project");
    Ok(())
}

/// Reads a project from disk.
pub fn load_project(path: &Path) -> Result<Project> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project file: {}", path.display()))?;
    let project = Project::from_json(&json)
        .with_context(|| format!("Failed to parse project file: {}", path.display()))?;
    debug!(path = %path.display(), sheets = project.sheets.len(), "loaded project");
    Ok(project)
}
