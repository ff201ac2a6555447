//! Cooperative cancellation for long-running refactoring requests
//!
//! Both suspension points of the rename transformer (semantic-model
//! acquisition and the solution-wide rename search) check the token;
//! collaborators are expected to check it at their own granularity.

use crate::error::{ShiftError, ShiftResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheap, clonable cancellation flag shared between a host and the
/// operations it spawned.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    canceled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a new, untriggered token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Triggers cancellation. All clones observe the flag.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }

    /// Returns `Err(ShiftError::Canceled)` once the token has fired.
    pub fn ensure_not_canceled(&self) -> ShiftResult<()> {
        if self.is_canceled() {
            Err(ShiftError::Canceled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_not_canceled() {
        let token = CancelToken::new();
        assert!(!token.is_canceled());
        assert!(token.ensure_not_canceled().is_ok());
    }

    #[test]
    fn cancellation_is_visible_to_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        token.cancel();
        assert!(clone.is_canceled());
        assert!(matches!(
            clone.ensure_not_canceled(),
            Err(ShiftError::Canceled)
        ));
    }
}
