//! Solution fixture builders

use shift_syntax::TextSpan;
use shift_workspace::{Document, DocumentId, Project, ProjectId, Solution};

/// Builds a single-project solution from `(name, text)` pairs.
pub fn solution_of(files: &[(&str, &str)]) -> Solution {
    let mut project = Project::new("TestProject");
    for (name, text) in files {
        project = project.with_document(Document::new(*name, *text));
    }
    Solution::new().with_project(project)
}

/// Document id for the `index`-th file handed to [`solution_of`].
pub fn doc_id(index: u32) -> DocumentId {
    DocumentId::new(ProjectId(0), index)
}

/// Looks a document up by name across the whole solution.
pub fn document_named<'a>(
    solution: &'a Solution,
    name: &str,
) -> Option<(DocumentId, &'a shift_workspace::Document)> {
    solution.documents().find(|(_, d)| d.name() == name)
}

/// A caret selection placed just inside the first occurrence of `needle`.
///
/// Panics when `needle` is absent; fixtures are expected to contain what
/// their tests select.
pub fn caret_on(text: &str, needle: &str) -> TextSpan {
    let start = text
        .find(needle)
        .unwrap_or_else(|| panic!("fixture does not contain '{}'", needle));
    TextSpan::caret(start + 1)
}
