//! Mock implementations for testing

use async_trait::async_trait;
use mockall::mock;
use shift_foundation::{CancelToken, ShiftResult};
use shift_refactor::services::{
    RenameOptions, RenameService, SemanticModel, SemanticProvider, Symbol,
};
use shift_syntax::TypeDeclaration;
use shift_workspace::{DocumentId, Solution};
use std::sync::Arc;

mock! {
    pub SemanticModel {}

    impl SemanticModel for SemanticModel {
        fn declared_symbol(&self, document: DocumentId, decl: &TypeDeclaration) -> Option<Symbol>;
    }
}

mock! {
    pub SemanticProvider {}

    #[async_trait]
    impl SemanticProvider for SemanticProvider {
        async fn semantic_model(
            &self,
            solution: &Solution,
            document: DocumentId,
            cancel: &CancelToken,
        ) -> ShiftResult<Arc<dyn SemanticModel>>;
    }
}

mock! {
    pub RenameService {}

    #[async_trait]
    impl RenameService for RenameService {
        async fn rename_symbol(
            &self,
            solution: &Solution,
            symbol: &Symbol,
            new_name: &str,
            options: &RenameOptions,
            cancel: &CancelToken,
        ) -> ShiftResult<Solution>;
    }
}

/// Create a mock semantic provider for testing
pub fn mock_semantic_provider() -> MockSemanticProvider {
    MockSemanticProvider::new()
}

/// Create a mock rename service for testing
pub fn mock_rename_service() -> MockRenameService {
    MockRenameService::new()
}
