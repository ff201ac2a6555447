//! Error handling for the TypeShift engine
//!
//! Every failure surfaces verbatim to the embedding host; nothing is
//! retried or recovered inside the engine.

use thiserror::Error;

/// Core error type used throughout the TypeShift engine
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShiftError {
    /// A caller-side contract breach, e.g. a declaration that is not part
    /// of the tree it was claimed to come from. Rejected at the boundary
    /// before any transformation is attempted.
    #[error("Precondition violated: {message}")]
    Precondition { message: String },

    /// A document with the synthesized name already exists in the project.
    #[error("Document already exists: {name}")]
    DocumentExists { name: String },

    /// The semantic model could not resolve a declaration to a symbol.
    #[error("Symbol resolution failed: {message}")]
    SymbolResolution { message: String },

    /// The rename collaborator reported a conflict; passed through
    /// unchanged, the input solution is unaffected.
    #[error("Rename conflict: {message}")]
    RenameConflict { message: String },

    /// The rename target is not a legal identifier.
    #[error("Invalid identifier: {name}")]
    InvalidIdentifier { name: String },

    /// A document could not be parsed by the syntax layer.
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// The cancellation token fired during a suspension point.
    #[error("Operation canceled")]
    Canceled,
}

impl ShiftError {
    /// Create a new precondition-violation error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Create a new document-exists error
    pub fn document_exists(name: impl Into<String>) -> Self {
        Self::DocumentExists { name: name.into() }
    }

    /// Create a new symbol-resolution error
    pub fn symbol_resolution(message: impl Into<String>) -> Self {
        Self::SymbolResolution {
            message: message.into(),
        }
    }

    /// Create a new rename-conflict error
    pub fn rename_conflict(message: impl Into<String>) -> Self {
        Self::RenameConflict {
            message: message.into(),
        }
    }

    /// Create a new invalid-identifier error
    pub fn invalid_identifier(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier { name: name.into() }
    }

    /// Create a new parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// True when the error is a cooperative cancellation, which hosts
    /// typically swallow rather than surface to the user.
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }
}

/// Result type alias for convenience
pub type ShiftResult<T> = Result<T, ShiftError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constructor_helpers_populate_messages() {
        let err = ShiftError::precondition("decl not in tree");
        assert_eq!(err.to_string(), "Precondition violated: decl not in tree");

        let err = ShiftError::document_exists("Bar.cs");
        assert_eq!(err.to_string(), "Document already exists: Bar.cs");

        let err = ShiftError::rename_conflict("Foo is already declared");
        assert_eq!(err.to_string(), "Rename conflict: Foo is already declared");
    }

    #[test]
    fn canceled_is_detectable() {
        assert!(ShiftError::Canceled.is_canceled());
        assert!(!ShiftError::parse("bad input").is_canceled());
    }
}
