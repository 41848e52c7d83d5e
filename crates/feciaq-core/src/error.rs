//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Only two outcomes exist below the HTTP layer: the caller sent something
/// that breaks a business rule, or something underneath the validation
/// boundary failed.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more business rules were violated. Messages are ordered and
    /// meant to be shown to the caller verbatim.
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// A storage or other infrastructure failure. The detail is for logs only.
    #[error("internal failure: {0}")]
    InternalFailure(String),
}

impl DomainError {
    /// Builds a `ValidationFailed` carrying a single message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed(vec![message.into()])
    }
}
