//! Typed identifiers for snapshot entities
//!
//! Ids are positional within a snapshot lineage: editing a document's text
//! keeps every id stable, and `add_document` assigns the next free index in
//! the owning project. Ids from one lineage must not be applied to an
//! unrelated solution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a project within a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub u32);

/// Identifies a document within a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentId {
    /// The owning project.
    pub project: ProjectId,
    /// Position of the document within its project.
    pub index: u32,
}

impl DocumentId {
    pub fn new(project: ProjectId, index: u32) -> Self {
        Self { project, index }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project:{}", self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/doc:{}", self.project, self.index)
    }
}
