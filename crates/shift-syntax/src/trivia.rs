//! Trivia-aware structural edits
//!
//! tree-sitter node ranges cover only the node's own text; the whitespace
//! and comment lines around it are the host's "trivia". Removal here
//! follows the KeepNoTrivia policy: the declaration leaves together with
//! the trivia attached to it, and nothing is reattached to a neighbor.

use crate::span::TextSpan;

/// Expands a node's byte span to cover its attached trivia.
///
/// Leading side: the node's own line indentation, plus every immediately
/// preceding line that is blank or holds only a comment (`//`, `///`, or a
/// single-line `/* ... */`). Trailing side: spaces and tabs up to and
/// including the line break.
pub fn removal_span(text: &str, span: TextSpan) -> TextSpan {
    let mut start = line_start(text, span.start);
    // Only claim the line when nothing but indentation precedes the node.
    if !text[start..span.start].trim().is_empty() {
        start = span.start;
    } else {
        while start > 0 {
            let prev_start = line_start(text, start - 1);
            let prev_line = text[prev_start..start].trim_end_matches(['\n', '\r']);
            if is_trivia_line(prev_line) {
                start = prev_start;
            } else {
                break;
            }
        }
    }

    let bytes = text.as_bytes();
    let mut end = span.end;
    while end < bytes.len() && (bytes[end] == b' ' || bytes[end] == b'\t') {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'\r' {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'\n' {
        end += 1;
    }

    TextSpan::new(start, end)
}

/// Removes the node (and its trivia) from `text`.
pub fn remove_with_trivia(text: &str, span: TextSpan) -> String {
    let expanded = removal_span(text, span);
    let mut result = String::with_capacity(text.len() - expanded.len());
    result.push_str(&text[..expanded.start]);
    result.push_str(&text[expanded.end..]);
    result
}

/// The indentation of the line the node starts on, when the node is the
/// first non-whitespace content of that line; empty otherwise.
pub fn node_indentation<'a>(text: &'a str, node_start: usize) -> &'a str {
    let start = line_start(text, node_start);
    let prefix = &text[start..node_start];
    if prefix.trim().is_empty() {
        prefix
    } else {
        ""
    }
}

/// The content of a fresh compilation unit whose sole top-level member is
/// the declaration, re-anchored at column zero.
///
/// `indent` is the indentation the declaration carried at its original
/// site; it is stripped from every line so nested declarations do not keep
/// their old nesting depth.
pub fn compilation_unit_with(decl_text: &str, indent: &str) -> String {
    let mut unit = String::with_capacity(decl_text.len() + 1);
    for (i, line) in decl_text.lines().enumerate() {
        if i > 0 {
            unit.push('\n');
        }
        let line = if !indent.is_empty() && line.starts_with(indent) {
            &line[indent.len()..]
        } else {
            line
        };
        unit.push_str(line);
    }
    let trimmed_len = unit.trim_end().len();
    unit.truncate(trimmed_len);
    unit.push('\n');
    unit
}

fn line_start(text: &str, offset: usize) -> usize {
    text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

fn is_trivia_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with("//")
        || (trimmed.starts_with("/*") && trimmed.ends_with("*/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span_of(text: &str, needle: &str) -> TextSpan {
        let start = text.find(needle).expect("needle present");
        TextSpan::new(start, start + needle.len())
    }

    #[test]
    fn removal_claims_comment_lines_above() {
        let text = "class Foo { }\n\n// helper type\nclass Bar { }\n";
        let span = span_of(text, "class Bar { }");
        let removed = remove_with_trivia(text, span);
        assert_eq!(removed, "class Foo { }\n");
    }

    #[test]
    fn removal_claims_doc_comments() {
        let text = "/// <summary>A bar.</summary>\nclass Bar { }\nclass Foo { }\n";
        let span = span_of(text, "class Bar { }");
        let removed = remove_with_trivia(text, span);
        assert_eq!(removed, "class Foo { }\n");
    }

    #[test]
    fn removal_keeps_code_on_the_same_line() {
        let text = "class Foo { } class Bar { }\n";
        let span = span_of(text, "class Bar { }");
        let removed = remove_with_trivia(text, span);
        assert_eq!(removed, "class Foo { } ");
    }

    #[test]
    fn removal_does_not_cross_code_lines() {
        let text = "class Foo { }\nclass Bar { }\n";
        let span = span_of(text, "class Bar { }");
        let removed = remove_with_trivia(text, span);
        assert_eq!(removed, "class Foo { }\n");
    }

    #[test]
    fn indentation_of_nested_declaration() {
        let text = "namespace N\n{\n    class Bar { }\n}\n";
        let start = text.find("class Bar").unwrap();
        assert_eq!(node_indentation(text, start), "    ");
    }

    #[test]
    fn compilation_unit_reanchors_at_column_zero() {
        let decl = "    class Bar\n    {\n        void Frob() { }\n    }";
        let unit = compilation_unit_with(decl.trim_start(), "    ");
        assert_eq!(unit, "class Bar\n{\n    void Frob() { }\n}\n");
    }

    #[test]
    fn compilation_unit_ends_with_single_newline() {
        let unit = compilation_unit_with("class Bar { }", "");
        assert_eq!(unit, "class Bar { }\n");
    }
}
