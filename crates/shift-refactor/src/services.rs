//! Collaborator boundary
//!
//! The semantic engine and the solution-wide rename engine are host
//! capabilities, consumed abstractly so a different analysis backend can
//! be substituted without touching the core logic. The reference
//! implementations used in tests live in `shift-test-support`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shift_foundation::{CancelToken, ShiftResult};
use shift_syntax::TypeDeclaration;
use shift_workspace::{DocumentId, Solution};
use std::sync::Arc;

/// The resolved semantic identity of a declaration, stable across its
/// references. Opaque to the core: it is produced by a [`SemanticModel`]
/// and handed unmodified to the [`RenameService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Backend-defined stable key.
    pub key: String,
    /// The symbol's current display name.
    pub name: String,
}

impl Symbol {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// Options forwarded to the rename collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenameOptions {
    /// Also rewrite occurrences inside string literals.
    pub rename_in_strings: bool,
    /// Also rewrite occurrences inside comments.
    pub rename_in_comments: bool,
}

/// Per-document resolution context mapping syntax to symbols.
pub trait SemanticModel: Send + Sync {
    /// The symbol declared by `decl` in `document`, or `None` when the
    /// declaration cannot be resolved (e.g. it contains errors).
    fn declared_symbol(&self, document: DocumentId, decl: &TypeDeclaration) -> Option<Symbol>;
}

/// Supplies semantic models on demand. Acquisition may require full or
/// incremental recompilation of the containing project, hence async and
/// cancellable.
#[async_trait]
pub trait SemanticProvider: Send + Sync {
    async fn semantic_model(
        &self,
        solution: &Solution,
        document: DocumentId,
        cancel: &CancelToken,
    ) -> ShiftResult<Arc<dyn SemanticModel>>;
}

/// Solution-wide rename engine. Performs its own reference discovery and
/// conflict analysis across every document; on success returns a new
/// solution with every reference updated consistently, on conflict fails
/// without partial edits.
#[async_trait]
pub trait RenameService: Send + Sync {
    async fn rename_symbol(
        &self,
        solution: &Solution,
        symbol: &Symbol,
        new_name: &str,
        options: &RenameOptions,
        cancel: &CancelToken,
    ) -> ShiftResult<Solution>;
}
