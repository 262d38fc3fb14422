// SPDX-License-Identifier: PMPL-1.0-or-later

//! The project catalog.
//!
//! A [`Catalog`] is built once, validated on the way in, and read-only from
//! then on. The reference data ships inside the binary; an external JSON or
//! YAML file can stand in for it.

mod validate;

pub use validate::{is_well_formed_period, validate, ValidationIssue};

use crate::config::parse_by_extension;
use crate::types::Project;
use crate::view;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

const BUILTIN_CATALOG: &str = include_str!("../../data/projects.yaml");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("reading catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing catalog {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("catalog failed validation with {} issue(s)", .issues.len())]
    Invalid { issues: Vec<ValidationIssue> },
}

/// Immutable, ordered, validated sequence of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Validate and wrap `projects`, keeping their order.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let issues = validate(&projects);
        if !issues.is_empty() {
            for issue in &issues {
                tracing::warn!(%issue, "catalog validation issue");
            }
            return Err(CatalogError::Invalid { issues });
        }
        tracing::debug!(projects = projects.len(), "catalog constructed");
        Ok(Self { projects })
    }

    /// The reference catalog embedded at compile time.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(parse_builtin()?)
    }

    /// Load and validate a JSON or YAML catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        Self::new(read_projects(path)?)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        view::find_by_id(self, id)
    }

    /// Hex SHA-256 over the canonical JSON form of the catalog.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let encoded = serde_json::to_vec(&self.projects)?;
        Ok(hex::encode(Sha256::digest(&encoded)))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

/// Parse the embedded catalog without validating it.
pub fn parse_builtin() -> Result<Vec<Project>, CatalogError> {
    serde_yaml::from_str(BUILTIN_CATALOG).map_err(|e| CatalogError::Parse {
        origin: "<builtin>".to_string(),
        message: e.to_string(),
    })
}

/// Read a catalog file without validating it.
pub fn read_projects(path: &Path) -> Result<Vec<Project>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_by_extension(path, &raw).map_err(|message| CatalogError::Parse {
        origin: path.display().to_string(),
        message,
    })
}
