//! Cross-cutting error types for Soonami.
//!
//! Feed and configuration errors live in their own crates. `CoreError`
//! covers failures that belong to the data model itself.

use thiserror::Error;

/// Errors raised by the core data model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
