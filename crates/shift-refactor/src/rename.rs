//! Rename-to-file transformer
//!
//! Asynchronous: both collaborator calls (semantic-model acquisition and
//! the solution-wide rename search) may suspend, and both observe the
//! cancellation token. Failures from either collaborator propagate
//! verbatim; no partially-renamed solution ever escapes.

use crate::services::{RenameOptions, RenameService, SemanticProvider};
use shift_foundation::{CancelToken, EngineConfig, ShiftError, ShiftResult};
use shift_syntax::TypeDeclaration;
use shift_workspace::{DocumentId, Solution};
use tracing::{debug, info};

/// Renames `decl` (and every reference the rename collaborator discovers)
/// to the base name of its containing document.
#[allow(clippy::too_many_arguments)]
pub async fn rename_to_match_file(
    semantics: &dyn SemanticProvider,
    renamer: &dyn RenameService,
    solution: &Solution,
    document_id: DocumentId,
    decl: &TypeDeclaration,
    options: &RenameOptions,
    config: &EngineConfig,
    cancel: &CancelToken,
) -> ShiftResult<Solution> {
    let document = solution
        .document(document_id)
        .ok_or_else(|| ShiftError::precondition(format!("No document {}", document_id)))?;
    let target = config
        .strip_suffix(document.name())
        .unwrap_or_else(|| document.name())
        .to_string();

    debug!(
        document = %document.name(),
        identifier = %decl.identifier,
        target = %target,
        "Resolving declaration for rename-to-file"
    );

    cancel.ensure_not_canceled()?;
    let model = semantics.semantic_model(solution, document_id, cancel).await?;
    let symbol = model.declared_symbol(document_id, decl).ok_or_else(|| {
        ShiftError::symbol_resolution(format!(
            "'{}' in {} does not resolve to a symbol",
            decl.identifier,
            document.name()
        ))
    })?;

    cancel.ensure_not_canceled()?;
    let renamed = renamer
        .rename_symbol(solution, &symbol, &target, options, cancel)
        .await?;

    info!(
        document = %document.name(),
        from = %decl.identifier,
        to = %target,
        "Rename-to-file complete"
    );
    Ok(renamed)
}
