//! C# syntax layer for the TypeShift engine
//!
//! Wraps tree-sitter with the handful of operations the refactoring core
//! needs: parsing a document, finding the narrowest node covering a
//! selection, viewing type-like declarations, and the two structural edits
//! (trivia-discarding removal, fresh compilation-unit synthesis).
//!
//! Trees are derived from document text on demand and never stored in
//! workspace snapshots; every edit here is text-to-text, with the node
//! byte ranges of a parse guiding the surgery.

pub mod span;
pub mod tree;
pub mod trivia;
pub mod type_decl;

pub use span::TextSpan;
pub use tree::SyntaxTree;
pub use type_decl::{TypeDeclKind, TypeDeclaration};
