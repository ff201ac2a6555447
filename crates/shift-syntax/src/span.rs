//! Byte-offset spans over document text

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open byte range `[start, end)` into a document's text.
///
/// A caret selection is represented as an empty span (`start == end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// An empty span at `offset`, i.e. a caret position.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` lies fully inside this span.
    pub fn contains(&self, other: TextSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment() {
        let outer = TextSpan::new(10, 20);
        assert!(outer.contains(TextSpan::new(10, 20)));
        assert!(outer.contains(TextSpan::caret(15)));
        assert!(!outer.contains(TextSpan::new(5, 12)));
        assert!(!outer.contains(TextSpan::new(15, 25)));
    }

    #[test]
    fn caret_is_empty() {
        assert!(TextSpan::caret(7).is_empty());
        assert_eq!(TextSpan::new(3, 9).len(), 6);
    }
}
