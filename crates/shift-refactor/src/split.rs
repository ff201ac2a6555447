//! File-split transformer
//!
//! Pure tree-to-tree transform: the declaration leaves its document with
//! the NoTrivia policy and becomes the sole member of a fresh compilation
//! unit registered as a new document in the same project. Never suspends.

use shift_foundation::{CollisionPolicy, EngineConfig, ShiftError, ShiftResult};
use shift_syntax::{trivia, SyntaxTree, TypeDeclaration};
use shift_workspace::{DocumentId, Solution};
use tracing::{debug, info};

/// Moves `decl` out of `document_id` into a new document named after the
/// declaration (`{identifier}{suffix}`).
///
/// Preconditions, rejected with `ShiftError::Precondition`: the document
/// must resolve in `solution` and must still contain `decl` byte for byte.
/// A name collision with an existing document in the project is rejected
/// with `ShiftError::DocumentExists` (the engine never overwrites or
/// disambiguates).
pub fn split_to_new_file(
    solution: &Solution,
    document_id: DocumentId,
    decl: &TypeDeclaration,
    config: &EngineConfig,
) -> ShiftResult<Solution> {
    let document = solution
        .document(document_id)
        .ok_or_else(|| ShiftError::precondition(format!("No document {}", document_id)))?;

    let tree = SyntaxTree::parse(document.text())?;
    if !decl.is_present_in(&tree) {
        return Err(ShiftError::precondition(format!(
            "Declaration '{}' is not part of {}",
            decl.identifier,
            document.name()
        )));
    }

    let new_name = format!("{}{}", decl.identifier, config.source_suffix);
    let project = solution
        .project(document_id.project)
        .ok_or_else(|| ShiftError::precondition(format!("No project {}", document_id.project)))?;
    if project.contains_document(&new_name) {
        match config.collision_policy {
            CollisionPolicy::Reject => return Err(ShiftError::document_exists(new_name)),
        }
    }

    debug!(
        source = %document.name(),
        target = %new_name,
        kind = %decl.kind,
        "Splitting type declaration into its own document"
    );

    let indent = trivia::node_indentation(tree.text(), decl.span.start);
    let remaining = trivia::remove_with_trivia(tree.text(), decl.span);
    let unit = trivia::compilation_unit_with(&decl.text, indent);

    let without_decl = solution
        .with_document_text(document_id, remaining)
        .ok_or_else(|| ShiftError::precondition(format!("No document {}", document_id)))?;
    let (split, new_id) = without_decl
        .add_document(document_id.project, new_name.clone(), unit)
        .ok_or_else(|| ShiftError::precondition(format!("No project {}", document_id.project)))?;

    info!(
        source = %document.name(),
        target = %new_name,
        new_document = %new_id,
        "Move-to-file split complete"
    );
    Ok(split)
}
