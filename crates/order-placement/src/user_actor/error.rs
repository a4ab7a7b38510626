//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// A required field was empty or whitespace.
    #[error("User validation error: {0} is required")]
    MissingField(&'static str),

    /// The email address is not well formed.
    #[error("User validation error: invalid email format: {0}")]
    InvalidEmail(String),

    /// The password is shorter than the minimum length.
    #[error("User validation error: password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// A user with the same external user id already exists.
    #[error("User ID already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
