//! Reference semantics and rename engine
//!
//! An in-memory stand-in for the host's analysis backend, exercising the
//! same trait boundary the real one would. Resolution and reference
//! discovery are name-scoped (every `identifier` node with matching text
//! counts as a reference), which is deliberately simpler than a real
//! semantic engine but consistent: what it resolves, it renames.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use shift_foundation::{CancelToken, ShiftError, ShiftResult};
use shift_refactor::services::{
    RenameOptions, RenameService, SemanticModel, SemanticProvider, Symbol,
};
use shift_syntax::{SyntaxTree, TextSpan, TypeDeclaration};
use shift_workspace::{DocumentId, Solution};
use std::sync::Arc;
use tracing::debug;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

/// Semantic provider over a snapshot: models re-parse documents on demand
/// and resolve declarations by presence.
#[derive(Debug, Default)]
pub struct SnapshotSemantics;

impl SnapshotSemantics {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SemanticProvider for SnapshotSemantics {
    async fn semantic_model(
        &self,
        solution: &Solution,
        document: DocumentId,
        cancel: &CancelToken,
    ) -> ShiftResult<Arc<dyn SemanticModel>> {
        cancel.ensure_not_canceled()?;
        if solution.document(document).is_none() {
            return Err(ShiftError::precondition(format!("No document {}", document)));
        }
        Ok(Arc::new(SnapshotSemanticModel {
            solution: solution.clone(),
        }))
    }
}

/// Model bound to one snapshot. Cheap to build: the snapshot is
/// `Arc`-shared, and parsing happens per lookup.
pub struct SnapshotSemanticModel {
    solution: Solution,
}

impl SemanticModel for SnapshotSemanticModel {
    fn declared_symbol(&self, document: DocumentId, decl: &TypeDeclaration) -> Option<Symbol> {
        let doc = self.solution.document(document)?;
        let tree = SyntaxTree::parse(doc.text()).ok()?;
        if !decl.is_present_in(&tree) {
            return None;
        }
        Some(Symbol::new(
            format!("{}::{}", document.project, decl.identifier),
            decl.identifier.clone(),
        ))
    }
}

/// Rename engine that scans every document for `identifier` nodes whose
/// text equals the symbol's name, with optional string/comment rewriting.
///
/// Conflict analysis is conservative: any existing identifier equal to the
/// target name anywhere in the solution is reported as a conflict, and the
/// input solution is returned unchanged (by never being touched).
#[derive(Debug, Default)]
pub struct ScanRenameService;

impl ScanRenameService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RenameService for ScanRenameService {
    async fn rename_symbol(
        &self,
        solution: &Solution,
        symbol: &Symbol,
        new_name: &str,
        options: &RenameOptions,
        cancel: &CancelToken,
    ) -> ShiftResult<Solution> {
        if !IDENTIFIER.is_match(new_name) {
            return Err(ShiftError::invalid_identifier(new_name));
        }
        if new_name == symbol.name {
            return Ok(solution.clone());
        }

        // Conflict pass before any edit is computed.
        for (_, doc) in solution.documents() {
            cancel.ensure_not_canceled()?;
            let tree = SyntaxTree::parse(doc.text())?;
            if !tree.identifier_occurrences(new_name).is_empty() {
                return Err(ShiftError::rename_conflict(format!(
                    "'{}' is already in use in {}",
                    new_name,
                    doc.name()
                )));
            }
        }

        // Edit pass: compute every document's new text, then assemble the
        // result snapshot in one sweep so a late failure leaks nothing.
        let mut edits: Vec<(DocumentId, String)> = Vec::new();
        for (id, doc) in solution.documents() {
            cancel.ensure_not_canceled()?;
            let tree = SyntaxTree::parse(doc.text())?;
            let mut spans = tree.identifier_occurrences(&symbol.name);
            spans.extend(trivia_occurrences(&tree, &symbol.name, options));
            if spans.is_empty() {
                continue;
            }
            spans.sort_by_key(|s| s.start);

            let mut text = doc.text().to_string();
            for span in spans.iter().rev() {
                text.replace_range(span.start..span.end, new_name);
            }
            debug!(document = %doc.name(), references = spans.len(), "Rewriting references");
            edits.push((id, text));
        }

        let mut renamed = solution.clone();
        for (id, text) in edits {
            renamed = renamed
                .with_document_text(id, text)
                .ok_or_else(|| ShiftError::precondition(format!("No document {}", id)))?;
        }
        Ok(renamed)
    }
}

/// Occurrences of `name` inside comment and string-literal nodes, when the
/// options ask for them.
fn trivia_occurrences(tree: &SyntaxTree, name: &str, options: &RenameOptions) -> Vec<TextSpan> {
    if !options.rename_in_strings && !options.rename_in_comments {
        return Vec::new();
    }
    let word = Regex::new(&format!(r"\b{}\b", regex::escape(name))).expect("word pattern");

    let mut spans = Vec::new();
    let mut cursor = tree.root().walk();
    let mut done = false;
    while !done {
        let node = cursor.node();
        let eligible = match node.kind() {
            "comment" => options.rename_in_comments,
            "string_literal" | "verbatim_string_literal" | "raw_string_literal" => {
                options.rename_in_strings
            }
            _ => false,
        };
        if eligible {
            let base = node.start_byte();
            for m in word.find_iter(tree.node_text(node)) {
                spans.push(TextSpan::new(base + m.start(), base + m.end()));
            }
        }
        // Literal nodes have no relevant children; still walk generically.
        if !eligible && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                done = true;
                break;
            }
        }
    }
    spans
}
