//! Foundation layer - error taxonomy, cancellation, and engine configuration
//!
//! This crate provides the building blocks every other TypeShift crate
//! depends on:
//! - `ShiftError` / `ShiftResult` (error handling)
//! - `CancelToken` (cooperative cancellation)
//! - `EngineConfig` (host-facing configuration)

pub mod cancel;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use cancel::CancelToken;
pub use config::{CollisionPolicy, EngineConfig};
pub use error::{ShiftError, ShiftResult};
