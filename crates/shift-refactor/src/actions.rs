//! Deferred refactor actions
//!
//! The two offered restructurings are tagged variants carrying the
//! captured declaration. Nothing is computed when an action is built; the
//! host presents `title()` and calls [`crate::RefactorEngine::apply`] only
//! if the user picks one, so neither solution is constructed eagerly.

use shift_syntax::TypeDeclaration;
use shift_workspace::DocumentId;

/// A restructuring the engine has offered for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefactorAction {
    /// Extract the declaration into a new document named after it.
    MoveToFile {
        document: DocumentId,
        decl: TypeDeclaration,
    },
    /// Rename the declaration to the containing document's base name,
    /// updating every reference across the solution.
    RenameToFile {
        document: DocumentId,
        decl: TypeDeclaration,
    },
}

impl RefactorAction {
    /// Human-readable title for the host's action list.
    pub fn title(&self) -> &'static str {
        match self {
            Self::MoveToFile { .. } => "Move type to file",
            Self::RenameToFile { .. } => "Rename type to match file name",
        }
    }

    /// The document the action was offered in.
    pub fn document(&self) -> DocumentId {
        match self {
            Self::MoveToFile { document, .. } | Self::RenameToFile { document, .. } => *document,
        }
    }

    /// The captured declaration.
    pub fn decl(&self) -> &TypeDeclaration {
        match self {
            Self::MoveToFile { decl, .. } | Self::RenameToFile { decl, .. } => decl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shift_syntax::{SyntaxTree, TextSpan};
    use shift_workspace::ProjectId;

    #[test]
    fn titles_match_the_host_action_list() {
        let tree = SyntaxTree::parse("class Bar { }").unwrap();
        let decl = TypeDeclaration::at(&tree, TextSpan::caret(7)).unwrap();
        let id = DocumentId::new(ProjectId(0), 0);

        let move_action = RefactorAction::MoveToFile {
            document: id,
            decl: decl.clone(),
        };
        let rename_action = RefactorAction::RenameToFile { document: id, decl };

        assert_eq!(move_action.title(), "Move type to file");
        assert_eq!(rename_action.title(), "Rename type to match file name");
        assert_eq!(move_action.document(), id);
        assert_eq!(move_action.decl().identifier, "Bar");
    }
}
