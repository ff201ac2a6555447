//! Solution, project, and document snapshot types

use crate::ids::{DocumentId, ProjectId};
use shift_foundation::EngineConfig;
use std::sync::Arc;
use tracing::debug;

/// A single source document: a name (conventionally ending in `.cs`) and
/// its current text. Snapshots store text only; syntax trees are derived on
/// demand by the syntax layer so documents stay `Send + Sync` and cheap to
/// share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// The document's display name, e.g. `Foo.cs`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The document's full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The name with the conventional suffix stripped (`Foo.cs` -> `Foo`),
    /// or `None` when the name does not carry the suffix.
    pub fn base_name<'a>(&'a self, config: &EngineConfig) -> Option<&'a str> {
        config.strip_suffix(&self.name)
    }
}

/// A named collection of documents.
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    documents: Vec<Arc<Document>>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builder-style addition used when assembling fixtures and initial
    /// snapshots.
    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(Arc::new(document));
        self
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().map(|d| d.as_ref())
    }

    pub fn document(&self, index: u32) -> Option<&Document> {
        self.documents.get(index as usize).map(|d| d.as_ref())
    }

    /// Whether a document with this exact name (case-insensitive, matching
    /// the host filesystem convention for C# projects) already exists.
    pub fn contains_document(&self, name: &str) -> bool {
        self.documents
            .iter()
            .any(|d| d.name.eq_ignore_ascii_case(name))
    }
}

/// The full immutable snapshot of everything the host is editing.
///
/// All edit APIs are snapshot-in/snapshot-out: they clone the spine that
/// changed and `Arc`-share every untouched project and document.
#[derive(Debug, Clone, Default)]
pub struct Solution {
    projects: Vec<Arc<Project>>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style addition; returns the id the project was assigned.
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(Arc::new(project));
        self
    }

    pub fn projects(&self) -> impl Iterator<Item = (ProjectId, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .map(|(i, p)| (ProjectId(i as u32), p.as_ref()))
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(id.0 as usize).map(|p| p.as_ref())
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.project(id.project)?.document(id.index)
    }

    /// Every document in the solution, in project order.
    pub fn documents(&self) -> impl Iterator<Item = (DocumentId, &Document)> {
        self.projects().flat_map(|(pid, project)| {
            project
                .documents
                .iter()
                .enumerate()
                .map(move |(i, d)| (DocumentId::new(pid, i as u32), d.as_ref()))
        })
    }

    /// Returns a new solution in which `id`'s document carries `text`.
    /// Every other project and document is shared with `self`.
    ///
    /// Returns `None` when `id` does not resolve in this snapshot.
    pub fn with_document_text(&self, id: DocumentId, text: impl Into<String>) -> Option<Solution> {
        let project = self.project(id.project)?;
        let old = project.document(id.index)?;

        let mut new_project = Project {
            name: project.name.clone(),
            documents: project.documents.clone(),
        };
        new_project.documents[id.index as usize] =
            Arc::new(Document::new(old.name.clone(), text.into()));

        Some(self.replace_project(id.project, new_project))
    }

    /// Returns a new solution with an extra document appended to `project`,
    /// along with the id the document was assigned. The existing snapshot
    /// is untouched.
    pub fn add_document(
        &self,
        project_id: ProjectId,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Option<(Solution, DocumentId)> {
        let project = self.project(project_id)?;
        let name = name.into();
        debug!(project = %project_id, document = %name, "Adding document to snapshot");

        let mut new_project = Project {
            name: project.name.clone(),
            documents: project.documents.clone(),
        };
        let index = new_project.documents.len() as u32;
        new_project.documents.push(Arc::new(Document::new(name, text)));

        let id = DocumentId::new(project_id, index);
        Some((self.replace_project(project_id, new_project), id))
    }

    fn replace_project(&self, id: ProjectId, project: Project) -> Solution {
        let mut projects = self.projects.clone();
        projects[id.0 as usize] = Arc::new(project);
        Solution { projects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_project_solution() -> Solution {
        Solution::new()
            .with_project(
                Project::new("App")
                    .with_document(Document::new("Foo.cs", "class Bar { }"))
                    .with_document(Document::new("Main.cs", "class Main { }")),
            )
            .with_project(Project::new("Lib").with_document(Document::new("Util.cs", "class Util { }")))
    }

    #[test]
    fn document_lookup_by_id() {
        let solution = two_project_solution();
        let id = DocumentId::new(ProjectId(0), 1);
        assert_eq!(solution.document(id).unwrap().name(), "Main.cs");
        assert!(solution.document(DocumentId::new(ProjectId(0), 9)).is_none());
    }

    #[test]
    fn with_document_text_leaves_original_snapshot_intact() {
        let solution = two_project_solution();
        let id = DocumentId::new(ProjectId(0), 0);

        let edited = solution.with_document_text(id, "class Renamed { }").unwrap();

        assert_eq!(edited.document(id).unwrap().text(), "class Renamed { }");
        assert_eq!(solution.document(id).unwrap().text(), "class Bar { }");
    }

    #[test]
    fn untouched_projects_are_shared_not_copied() {
        let solution = two_project_solution();
        let id = DocumentId::new(ProjectId(0), 0);

        let edited = solution.with_document_text(id, "class Renamed { }").unwrap();

        assert!(Arc::ptr_eq(&solution.projects[1], &edited.projects[1]));
        assert!(!Arc::ptr_eq(&solution.projects[0], &edited.projects[0]));
    }

    #[test]
    fn add_document_assigns_next_index() {
        let solution = two_project_solution();

        let (grown, id) = solution
            .add_document(ProjectId(0), "Bar.cs", "class Bar { }")
            .unwrap();

        assert_eq!(id, DocumentId::new(ProjectId(0), 2));
        assert_eq!(grown.document(id).unwrap().name(), "Bar.cs");
        // Original snapshot still has two documents in the project.
        assert_eq!(solution.project(ProjectId(0)).unwrap().documents().count(), 2);
    }

    #[test]
    fn contains_document_is_case_insensitive() {
        let solution = two_project_solution();
        let project = solution.project(ProjectId(0)).unwrap();
        assert!(project.contains_document("foo.CS"));
        assert!(!project.contains_document("Bar.cs"));
    }

    #[test]
    fn base_name_strips_conventional_suffix() {
        let config = shift_foundation::EngineConfig::default();
        let doc = Document::new("Widget.cs", "");
        assert_eq!(doc.base_name(&config), Some("Widget"));
        let doc = Document::new("notes.txt", "");
        assert_eq!(doc.base_name(&config), None);
    }
}
