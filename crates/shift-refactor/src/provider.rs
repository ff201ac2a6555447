//! Refactoring provider
//!
//! `RefactorEngine` is the host-facing entry point: given a snapshot, a
//! document, and a selection, it computes the offerable actions, and
//! applies one on demand. Detection is pure and synchronous; application
//! of the rename action is async and cancellable.

use crate::actions::RefactorAction;
use crate::eligibility;
use crate::rename::rename_to_match_file;
use crate::services::{RenameOptions, RenameService, SemanticProvider};
use crate::split::split_to_new_file;
use shift_foundation::{CancelToken, EngineConfig, ShiftError, ShiftResult};
use shift_syntax::{SyntaxTree, TextSpan};
use shift_workspace::{DocumentId, Solution};
use std::sync::Arc;
use tracing::debug;

/// The engine, wired to the host's semantic and rename capabilities.
pub struct RefactorEngine {
    semantics: Arc<dyn SemanticProvider>,
    renamer: Arc<dyn RenameService>,
    config: EngineConfig,
}

impl RefactorEngine {
    pub fn new(semantics: Arc<dyn SemanticProvider>, renamer: Arc<dyn RenameService>) -> Self {
        Self::with_config(semantics, renamer, EngineConfig::default())
    }

    pub fn with_config(
        semantics: Arc<dyn SemanticProvider>,
        renamer: Arc<dyn RenameService>,
        config: EngineConfig,
    ) -> Self {
        Self {
            semantics,
            renamer,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The actions offerable for the selection, in presentation order.
    ///
    /// An ineligible context (no type declaration under the selection, or
    /// the name already matches the file) yields an empty list, not an
    /// error. A document id that does not resolve in `solution` is a
    /// caller contract breach and is rejected.
    pub fn available_refactorings(
        &self,
        solution: &Solution,
        document_id: DocumentId,
        span: TextSpan,
    ) -> ShiftResult<Vec<RefactorAction>> {
        let document = solution
            .document(document_id)
            .ok_or_else(|| ShiftError::precondition(format!("No document {}", document_id)))?;
        let tree = SyntaxTree::parse(document.text())?;

        let Some(decl) = eligibility::detect(&tree, span, document.name(), &self.config) else {
            return Ok(Vec::new());
        };

        debug!(
            document = %document.name(),
            identifier = %decl.identifier,
            "Offering move-to-file and rename-to-file actions"
        );
        Ok(vec![
            RefactorAction::MoveToFile {
                document: document_id,
                decl: decl.clone(),
            },
            RefactorAction::RenameToFile {
                document: document_id,
                decl,
            },
        ])
    }

    /// Applies a previously offered action against `solution`, returning
    /// the new snapshot. The host decides whether that snapshot becomes
    /// current.
    pub async fn apply(
        &self,
        solution: &Solution,
        action: &RefactorAction,
        options: &RenameOptions,
        cancel: &CancelToken,
    ) -> ShiftResult<Solution> {
        match action {
            RefactorAction::MoveToFile { document, decl } => {
                split_to_new_file(solution, *document, decl, &self.config)
            }
            RefactorAction::RenameToFile { document, decl } => {
                rename_to_match_file(
                    self.semantics.as_ref(),
                    self.renamer.as_ref(),
                    solution,
                    *document,
                    decl,
                    options,
                    &self.config,
                    cancel,
                )
                .await
            }
        }
    }
}
