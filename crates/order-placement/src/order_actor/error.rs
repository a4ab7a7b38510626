//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Orders must be for at least one unit.
    #[error("Order validation error: quantity must be greater than zero")]
    ZeroQuantity,

    /// The order does not name a user.
    #[error("Order validation error: user id is required")]
    MissingUserId,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
