//! The TypeShift refactoring core
//!
//! Inspects a single type declaration under a user selection and offers two
//! semantics-preserving restructurings over an immutable workspace
//! snapshot:
//!
//! - **Move type to file** — detach the declaration from its document and
//!   re-home it as the sole member of a brand-new document named after it.
//! - **Rename type to match file name** — rename the declared symbol, and
//!   every reference to it across the solution, to the containing file's
//!   base name.
//!
//! The core never mutates a snapshot and never performs reference
//! discovery itself; semantic resolution and solution-wide renaming are
//! capabilities the host supplies through the traits in [`services`].

pub mod actions;
pub mod eligibility;
pub mod provider;
pub mod rename;
pub mod services;
pub mod split;

pub use actions::RefactorAction;
pub use provider::RefactorEngine;
pub use services::{RenameOptions, RenameService, SemanticModel, SemanticProvider, Symbol};
