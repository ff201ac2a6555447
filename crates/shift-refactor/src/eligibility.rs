//! Eligibility detection
//!
//! Pure projection from (tree, selection, document name) to the type
//! declaration both refactorings would operate on. Ineligibility is a
//! silent no-op, never an error.

use shift_foundation::EngineConfig;
use shift_syntax::{SyntaxTree, TextSpan, TypeDeclaration};
use tracing::debug;

/// The type declaration under `span`, unless the document's base name
/// already matches the declared identifier (case-insensitively), in which
/// case neither refactoring is useful and `None` is returned.
///
/// The narrowest node covering `span` must itself be the declaration (or
/// its name identifier); selections inside members or further-removed
/// enclosing constructs do not qualify.
pub fn detect(
    tree: &SyntaxTree,
    span: TextSpan,
    document_name: &str,
    config: &EngineConfig,
) -> Option<TypeDeclaration> {
    let decl = TypeDeclaration::at(tree, span)?;

    if let Some(base) = config.strip_suffix(document_name) {
        if base.eq_ignore_ascii_case(&decl.identifier) {
            debug!(
                document = %document_name,
                identifier = %decl.identifier,
                "Declaration already matches file name, nothing to offer"
            );
            return None;
        }
    }

    debug!(
        document = %document_name,
        kind = %decl.kind,
        identifier = %decl.identifier,
        "Found eligible type declaration"
    );
    Some(decl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "class Bar\n{\n    void Frob() { }\n}\n";

    fn caret_on_bar() -> TextSpan {
        TextSpan::caret(SOURCE.find("Bar").unwrap() + 1)
    }

    #[test]
    fn offers_when_names_differ() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        let config = EngineConfig::default();
        let decl = detect(&tree, caret_on_bar(), "Foo.cs", &config).unwrap();
        assert_eq!(decl.identifier, "Bar");
    }

    #[test]
    fn silent_when_names_already_match() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        let config = EngineConfig::default();
        assert!(detect(&tree, caret_on_bar(), "Bar.cs", &config).is_none());
        // Case-insensitive guard.
        assert!(detect(&tree, caret_on_bar(), "bar.CS", &config).is_none());
    }

    #[test]
    fn silent_when_selection_is_not_a_type_declaration() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        let config = EngineConfig::default();
        let caret = TextSpan::caret(SOURCE.find("Frob").unwrap() + 1);
        assert!(detect(&tree, caret, "Foo.cs", &config).is_none());
    }

    #[test]
    fn unconventional_document_names_are_still_eligible() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        let config = EngineConfig::default();
        // "Bar" with no suffix can never equal "Bar.cs", matching the
        // original guard's behavior.
        assert!(detect(&tree, caret_on_bar(), "Bar", &config).is_some());
    }
}
