//! Type-like declaration views

use crate::span::TextSpan;
use crate::tree::SyntaxTree;
use serde::{Deserialize, Serialize};
use std::fmt;
use tree_sitter::Node;

/// The type-like declaration kinds the engine restructures. Mirrors the
/// host language's "base type declaration" family; delegates are not
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeDeclKind {
    Class,
    Struct,
    Interface,
    Enum,
    Record,
}

impl TypeDeclKind {
    /// Maps a tree-sitter node kind to a declaration kind.
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(Self::Class),
            "struct_declaration" => Some(Self::Struct),
            "interface_declaration" => Some(Self::Interface),
            "enum_declaration" => Some(Self::Enum),
            "record_declaration" => Some(Self::Record),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
        }
    }
}

impl fmt::Display for TypeDeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An owned view of one type-like declaration, detached from the tree it
/// was found in so deferred actions can capture it without borrowing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDeclaration {
    /// Declaration kind (class, struct, ...).
    pub kind: TypeDeclKind,
    /// The declared identifier, e.g. `Bar`.
    pub identifier: String,
    /// Byte span of the declaration node (trivia excluded).
    pub span: TextSpan,
    /// The declaration's exact source text.
    pub text: String,
}

impl TypeDeclaration {
    /// The declaration covering `span` in `tree`, when the narrowest
    /// covering node *is* a type-like declaration.
    ///
    /// One adjustment mirrors the original host, where identifiers are
    /// tokens rather than nodes: a selection landing on the declaration's
    /// own name resolves to the declaration. No other ancestor walking is
    /// performed, so a selection inside a member or a nested construct
    /// yields `None`.
    pub fn at(tree: &SyntaxTree, span: TextSpan) -> Option<TypeDeclaration> {
        let node = tree.covering_node(span)?;
        let decl_node = if TypeDeclKind::from_node_kind(node.kind()).is_some() {
            node
        } else {
            let parent = node.parent()?;
            let is_name_of_decl = TypeDeclKind::from_node_kind(parent.kind()).is_some()
                && parent
                    .child_by_field_name("name")
                    .is_some_and(|name| name.id() == node.id());
            if !is_name_of_decl {
                return None;
            }
            parent
        };
        Self::from_node(tree, decl_node)
    }

    /// Builds a view from a node already known to be a type declaration.
    pub fn from_node(tree: &SyntaxTree, node: Node<'_>) -> Option<TypeDeclaration> {
        let kind = TypeDeclKind::from_node_kind(node.kind())?;
        let name = node.child_by_field_name("name")?;
        Some(TypeDeclaration {
            kind,
            identifier: tree.node_text(name).to_string(),
            span: tree.node_span(node),
            text: tree.node_text(node).to_string(),
        })
    }

    /// Whether this declaration is still present, byte for byte, at its
    /// recorded span of `tree`. Transformer preconditions hang off this.
    pub fn is_present_in(&self, tree: &SyntaxTree) -> bool {
        tree.text()
            .get(self.span.start..self.span.end)
            .is_some_and(|slice| slice == self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "class Bar\n{\n    void Frob() { }\n}\n\nstruct Baz { }\n";

    fn caret_at(needle: &str) -> TextSpan {
        TextSpan::caret(SOURCE.find(needle).unwrap() + 1)
    }

    #[test]
    fn selection_on_identifier_resolves_to_declaration() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        let decl = TypeDeclaration::at(&tree, caret_at("Bar")).unwrap();
        assert_eq!(decl.kind, TypeDeclKind::Class);
        assert_eq!(decl.identifier, "Bar");
        assert!(decl.text.starts_with("class Bar"));
    }

    #[test]
    fn selection_of_whole_declaration_resolves() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        let start = SOURCE.find("struct Baz { }").unwrap();
        let decl =
            TypeDeclaration::at(&tree, TextSpan::new(start, start + "struct Baz { }".len()))
                .unwrap();
        assert_eq!(decl.kind, TypeDeclKind::Struct);
        assert_eq!(decl.identifier, "Baz");
    }

    #[test]
    fn selection_inside_member_is_not_a_declaration() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        // Caret on "Frob": the covering node is the method's identifier,
        // whose parent is a method declaration, not a type declaration.
        assert!(TypeDeclaration::at(&tree, caret_at("Frob")).is_none());
    }

    #[test]
    fn nested_type_resolves_to_itself_not_the_outer_type() {
        let source = "class Outer\n{\n    class Inner { }\n}\n";
        let tree = SyntaxTree::parse(source).unwrap();
        let caret = TextSpan::caret(source.find("Inner").unwrap() + 1);
        let decl = TypeDeclaration::at(&tree, caret).unwrap();
        assert_eq!(decl.identifier, "Inner");
    }

    #[test]
    fn presence_check_detects_stale_views() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        let decl = TypeDeclaration::at(&tree, caret_at("Bar")).unwrap();
        assert!(decl.is_present_in(&tree));

        let other = SyntaxTree::parse("class Unrelated { }").unwrap();
        assert!(!decl.is_present_in(&other));
    }
}
