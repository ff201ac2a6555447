//! Engine configuration
//!
//! Hosts deserialize `EngineConfig` from their own configuration files and
//! hand it to the refactoring entry points. Defaults match the behavior of
//! the original C# provider except where noted.

use serde::{Deserialize, Serialize};

/// What to do when a file split would synthesize a document whose name is
/// already taken in the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CollisionPolicy {
    /// Fail the split with `ShiftError::DocumentExists`.
    #[default]
    Reject,
}

/// Configuration for the refactoring engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Conventional source-file suffix, matched case-insensitively.
    pub source_suffix: String,
    /// Policy applied when a split collides with an existing document.
    pub collision_policy: CollisionPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            source_suffix: ".cs".to_string(),
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Strips the configured suffix from a document name, matching the
    /// suffix case-insensitively. Returns `None` when the name does not
    /// carry the suffix.
    pub fn strip_suffix<'a>(&self, document_name: &'a str) -> Option<&'a str> {
        let suffix_len = self.source_suffix.len();
        let split = document_name.len().checked_sub(suffix_len)?;
        if split == 0 || !document_name.is_char_boundary(split) {
            return None;
        }
        let (base, suffix) = document_name.split_at(split);
        if suffix.eq_ignore_ascii_case(&self.source_suffix) {
            Some(base)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_suffix_is_cs() {
        let config = EngineConfig::default();
        assert_eq!(config.source_suffix, ".cs");
        assert_eq!(config.collision_policy, CollisionPolicy::Reject);
    }

    #[test]
    fn strip_suffix_is_case_insensitive() {
        let config = EngineConfig::default();
        assert_eq!(config.strip_suffix("Foo.cs"), Some("Foo"));
        assert_eq!(config.strip_suffix("Foo.CS"), Some("Foo"));
        assert_eq!(config.strip_suffix("Foo.txt"), None);
        assert_eq!(config.strip_suffix(".cs"), None);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source_suffix, config.source_suffix);
    }
}
