//! Test support for the TypeShift engine
//!
//! Provides solution fixture builders, `mockall` mocks for the
//! collaborator traits, and a reference in-memory semantics + rename
//! engine good enough for integration tests.

pub mod fixtures;
pub mod mocks;
pub mod semantics;

pub use fixtures::{caret_on, doc_id, document_named, solution_of};
pub use mocks::{MockRenameService, MockSemanticModel, MockSemanticProvider};
pub use semantics::{ScanRenameService, SnapshotSemantics};

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Initialize tracing output for tests. Safe to call from every test;
/// only the first call installs the subscriber. Honors `RUST_LOG`.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
