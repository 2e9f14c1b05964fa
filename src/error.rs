//! Error types for email address validation.
//!
//! This module defines the custom error type using `thiserror` for precise
//! error handling.

use thiserror::Error;

/// Errors that can occur when constructing an [`EmailAddress`].
///
/// [`EmailAddress`]: crate::EmailAddress
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided input (or its absence) is not a valid email address.
    ///
    /// Carries the rejected raw input so callers can report it; `None` means
    /// no input was supplied at all.
    #[error("Invalid email address: {}", .0.as_deref().unwrap_or("<none>"))]
    InvalidEmailAddress(Option<String>),
}

impl ValidationError {
    /// The raw input that was rejected, if any was supplied.
    pub fn raw_input(&self) -> Option<&str> {
        match self {
            Self::InvalidEmailAddress(raw) => raw.as_deref(),
        }
    }
}
