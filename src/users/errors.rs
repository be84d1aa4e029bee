//! # User Errors
//!
//! Error types for the user service layer.

use thiserror::Error;

/// Result type for user operations
pub type UserResult<T> = Result<T, UserError>;

/// Domain errors surfaced by the user service.
///
/// The HTTP layer is the only place these are translated into status
/// codes, via [`UserError::status_code`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// Name must not be empty
    #[error("name must not be empty")]
    InvalidName,

    /// Email must contain '@'
    #[error("email is not valid")]
    InvalidEmail,

    /// Age must be greater than zero
    #[error("age must be greater than 0")]
    InvalidAge,

    /// Referenced user id does not exist
    #[error("user not found")]
    NotFound,

    /// Storage backend failure
    #[error("storage error: {0}")]
    Storage(String),
}

impl UserError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            UserError::InvalidName => 400,
            UserError::InvalidEmail => 400,
            UserError::InvalidAge => 400,

            // 404 Not Found
            UserError::NotFound => 404,

            // 500 Internal Server Error
            UserError::Storage(_) => 500,
        }
    }

    /// Returns whether this error is correctable by the client
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(UserError::InvalidName.status_code(), 400);
        assert_eq!(UserError::InvalidEmail.status_code(), 400);
        assert_eq!(UserError::InvalidAge.status_code(), 400);
        assert_eq!(UserError::NotFound.status_code(), 404);
        assert_eq!(UserError::Storage("boom".to_string()).status_code(), 500);
    }

    #[test]
    fn test_client_errors_are_below_500() {
        assert!(UserError::InvalidAge.is_client_error());
        assert!(UserError::NotFound.is_client_error());
        assert!(!UserError::Storage("boom".to_string()).is_client_error());
    }
}
