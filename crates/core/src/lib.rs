//! Shared primitives for all Rust crates in Roster.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Roster crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
///
/// The variant is the stable error code; the payload is the human-readable
/// message.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn not_found_formats_with_its_kind_prefix() {
        let error = AppError::NotFound("user 'u1' not found".to_owned());
        assert_eq!(error.to_string(), "not found: user 'u1' not found");
    }

    #[test]
    fn internal_formats_with_its_kind_prefix() {
        let error = AppError::Internal("connection reset".to_owned());
        assert_eq!(error.to_string(), "internal error: connection reset");
    }
}
