//! Immutable workspace snapshots
//!
//! The host's solution/project/document model, expressed as persistent
//! value types: every edit produces a *new* `Solution` that structurally
//! shares everything it did not touch. Nothing in this crate mutates in
//! place, which is what lets concurrent refactoring requests run against
//! independent snapshots without coordination.

pub mod ids;
pub mod solution;

pub use ids::{DocumentId, ProjectId};
pub use solution::{Document, Project, Solution};
