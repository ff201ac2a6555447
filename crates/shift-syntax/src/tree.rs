//! Parsed syntax trees over C# source text

use crate::span::TextSpan;
use shift_foundation::{ShiftError, ShiftResult};
use tree_sitter::{Node, Parser, Tree};

/// Get the C# language for tree-sitter
fn get_language() -> tree_sitter::Language {
    tree_sitter_c_sharp::LANGUAGE.into()
}

/// An immutable parse of one document's text.
///
/// The tree borrows nothing: it owns its text, and `Node` handles hand out
/// byte ranges into it. Structural "edits" are expressed as new text (see
/// [`crate::trivia`]) followed by a fresh parse.
pub struct SyntaxTree {
    text: String,
    tree: Tree,
}

impl SyntaxTree {
    /// Parses `text` as a C# compilation unit.
    pub fn parse(text: impl Into<String>) -> ShiftResult<Self> {
        let text = text.into();
        let mut parser = Parser::new();
        parser
            .set_language(&get_language())
            .map_err(|e| ShiftError::parse(format!("Failed to load C# grammar: {}", e)))?;
        let tree = parser
            .parse(&text, None)
            .ok_or_else(|| ShiftError::parse("Failed to parse C# source"))?;
        Ok(Self { text, tree })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The narrowest named node fully covering `span`, mirroring the host
    /// notion of "the node under the selection". Empty spans behave as
    /// caret positions.
    pub fn covering_node(&self, span: TextSpan) -> Option<Node<'_>> {
        if span.end > self.text.len() {
            return None;
        }
        self.root().named_descendant_for_byte_range(span.start, span.end)
    }

    /// The source text of `node`.
    pub fn node_text(&self, node: Node<'_>) -> &str {
        &self.text[node.start_byte()..node.end_byte()]
    }

    /// Byte span of `node`.
    pub fn node_span(&self, node: Node<'_>) -> TextSpan {
        TextSpan::new(node.start_byte(), node.end_byte())
    }

    /// Byte spans of every `identifier` node whose text equals `name`,
    /// in document order. Used by reference scanners.
    pub fn identifier_occurrences(&self, name: &str) -> Vec<TextSpan> {
        let mut spans = Vec::new();
        let mut cursor = self.root().walk();
        let mut done = false;
        while !done {
            let node = cursor.node();
            if node.kind() == "identifier" && self.node_text(node) == name {
                spans.push(self.node_span(node));
            }
            if cursor.goto_first_child() {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "class Bar\n{\n    void Frob() { }\n}\n";

    #[test]
    fn covering_node_finds_narrowest_named_node() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        // Caret inside the identifier "Bar" (byte 7).
        let node = tree.covering_node(TextSpan::caret(7)).unwrap();
        assert_eq!(node.kind(), "identifier");
        assert_eq!(tree.node_text(node), "Bar");
    }

    #[test]
    fn covering_node_of_whole_declaration() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        let node = tree
            .covering_node(TextSpan::new(0, SOURCE.trim_end().len()))
            .unwrap();
        assert_eq!(node.kind(), "class_declaration");
    }

    #[test]
    fn covering_node_rejects_out_of_bounds_span() {
        let tree = SyntaxTree::parse(SOURCE).unwrap();
        assert!(tree.covering_node(TextSpan::caret(SOURCE.len() + 10)).is_none());
    }

    #[test]
    fn identifier_occurrences_in_document_order() {
        let source = "class Bar { Bar Make() { return new Bar(); } }";
        let tree = SyntaxTree::parse(source).unwrap();
        let spans = tree.identifier_occurrences("Bar");
        assert_eq!(spans.len(), 3);
        for span in spans {
            assert_eq!(&source[span.start..span.end], "Bar");
        }
    }
}
